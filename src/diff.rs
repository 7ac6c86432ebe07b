//! Structural diffing of tender records.
//!
//! [`diff`] compares two versions of a record top-down and returns an
//! annotated copy of each side, ready for rendering. Mapping keys are
//! compared by set membership, sequences by set difference, and scalar
//! leaves by a character-level edit-distance diff of their normalized
//! display strings.
//!
//! # Examples
//!
//! ```
//! use tender_diff::{diff, parse_json, RenderStyle};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let old = parse_json(r#"{"Price": 3500.0}"#)?;
//! let new = parse_json(r#"{"Price": 3750.0}"#)?;
//!
//! let (old_marked, new_marked) = diff(&old, &new, RenderStyle::Markup)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::distance::{distance, reconstruct};
use crate::error::DiffError;
use crate::record::{Record, Scalar};
use crate::render::{render, Annotation, RenderStyle};
use indexmap::IndexMap;

/// Computes the structural diff between two record versions.
///
/// Returns `(old', new')` mirroring the shape of the inputs, with scalar
/// leaves replaced by rendered strings and added/removed subtrees
/// annotated wholesale (keys included). Policy by shape, evaluated
/// top-down:
///
/// - A mapping on the old side against a bare string on the new side is
///   the deletion sentinel ("this entity no longer exists"): the whole
///   old record is marked removed and the message passes through
///   untouched, with no character-level diff against it.
/// - Two mappings diff key by key: keys on one side only are annotated
///   wholesale, shared keys recurse by value shape.
/// - Two sequences diff by set membership, not position: reordering and
///   duplicate-count changes are indistinguishable from no change. This
///   is intentional, not an approximation to be fixed here.
/// - Two scalars are normalized to display strings and diffed character
///   by character.
///
/// Any other pairing is a [`DiffError::ShapeMismatch`] naming the
/// offending key path; no partial result is returned.
///
/// The function is pure: it owns every intermediate buffer, touches no
/// shared state, and is safe to call from any number of threads at once.
pub fn diff(old: &Record, new: &Record, style: RenderStyle) -> Result<(Record, Record), DiffError> {
    let mut path: Vec<String> = Vec::new();

    // Mapping recursion runs on this explicit frame stack; record depth
    // never touches the call stack.
    let mut stack: Vec<Frame> = match resolve(old, new, &path, style)? {
        Step::Done(old_out, new_out) => return Ok((old_out, new_out)),
        Step::Descend(entries, added) => vec![Frame::new(None, entries, added)],
    };

    loop {
        let entry = {
            let top = stack.last_mut().expect("stack is non-empty until the root frame closes");
            if top.next < top.entries.len() {
                let entry = top.entries[top.next];
                top.next += 1;
                Some(entry)
            } else {
                None
            }
        };

        let Some(entry) = entry else {
            let frame = stack.pop().expect("checked non-empty above");
            let (key, old_out, new_out) = frame.finish(style);
            match stack.last_mut() {
                None => return Ok((old_out, new_out)),
                Some(parent) => {
                    path.pop();
                    let key = key.expect("non-root frames carry their parent key");
                    parent.old_out.insert(key.clone(), old_out);
                    parent.new_out.insert(key, new_out);
                }
            }
            continue;
        };

        match entry {
            Entry::Removed(key, value) => {
                let top = stack.last_mut().expect("frame still on the stack");
                top.old_out.insert(
                    style.wrap(Annotation::Removed, key),
                    annotate(value, Annotation::Removed, style),
                );
            }
            Entry::Shared(key, old_value, new_value) => {
                path.push(key.clone());
                match resolve(old_value, new_value, &path, style)? {
                    Step::Done(old_out, new_out) => {
                        path.pop();
                        let top = stack.last_mut().expect("frame still on the stack");
                        top.old_out.insert(key.clone(), old_out);
                        top.new_out.insert(key.clone(), new_out);
                    }
                    Step::Descend(entries, added) => {
                        stack.push(Frame::new(Some(key.clone()), entries, added));
                    }
                }
            }
        }
    }
}

/// One shape decision: either the pair resolves to finished output, or
/// it is a mapping pair whose entries need a frame of their own.
enum Step<'a> {
    Done(Record, Record),
    Descend(Vec<Entry<'a>>, Vec<(&'a String, &'a Record)>),
}

/// A single key of a mapping pair, in the old side's insertion order.
#[derive(Clone, Copy)]
enum Entry<'a> {
    Removed(&'a String, &'a Record),
    Shared(&'a String, &'a Record, &'a Record),
}

/// An in-progress mapping comparison.
struct Frame<'a> {
    /// Key under which the finished pair lands in the parent frame;
    /// `None` for the root.
    key: Option<String>,
    entries: Vec<Entry<'a>>,
    next: usize,
    /// Keys present only on the new side, appended on finish in the new
    /// side's insertion order.
    added: Vec<(&'a String, &'a Record)>,
    old_out: IndexMap<String, Record>,
    new_out: IndexMap<String, Record>,
}

impl<'a> Frame<'a> {
    fn new(
        key: Option<String>,
        entries: Vec<Entry<'a>>,
        added: Vec<(&'a String, &'a Record)>,
    ) -> Self {
        Self {
            key,
            entries,
            next: 0,
            added,
            old_out: IndexMap::new(),
            new_out: IndexMap::new(),
        }
    }

    fn finish(mut self, style: RenderStyle) -> (Option<String>, Record, Record) {
        for (key, value) in self.added.drain(..) {
            self.new_out.insert(
                style.wrap(Annotation::Added, key),
                annotate(value, Annotation::Added, style),
            );
        }
        (
            self.key,
            Record::Mapping(self.old_out),
            Record::Mapping(self.new_out),
        )
    }
}

fn resolve<'a>(
    old: &'a Record,
    new: &'a Record,
    path: &[String],
    style: RenderStyle,
) -> Result<Step<'a>, DiffError> {
    match (old, new) {
        // Deletion sentinel: the entity behind this record is gone.
        (Record::Mapping(_), Record::Scalar(Scalar::Text(message))) => Ok(Step::Done(
            annotate(old, Annotation::Removed, style),
            Record::text(message.clone()),
        )),
        (Record::Mapping(old_map), Record::Mapping(new_map)) => {
            let entries = old_map
                .iter()
                .map(|(key, value)| match new_map.get(key) {
                    Some(other) => Entry::Shared(key, value, other),
                    None => Entry::Removed(key, value),
                })
                .collect();
            let added = new_map
                .iter()
                .filter(|(key, _)| !old_map.contains_key(*key))
                .collect();
            Ok(Step::Descend(entries, added))
        }
        (Record::Sequence(old_items), Record::Sequence(new_items)) => {
            let (old_out, new_out) = sequence_difference(old_items, new_items, style);
            Ok(Step::Done(old_out, new_out))
        }
        (Record::Scalar(old_scalar), Record::Scalar(new_scalar)) => {
            let (old_out, new_out) = scalar_pair(old_scalar, new_scalar, style);
            Ok(Step::Done(old_out, new_out))
        }
        _ => Err(DiffError::shape_mismatch(path, old.kind(), new.kind())),
    }
}

/// Character-level diff of two scalar leaves over their normalized
/// display strings.
fn scalar_pair(old: &Scalar, new: &Scalar, style: RenderStyle) -> (Record, Record) {
    let source = old.display();
    let target = new.display();
    let (_, matrix) = distance(&source, &target);
    let ops = reconstruct(&source, &target, &matrix);
    let (old_text, new_text) = render(&source, &target, &ops, style);
    (Record::text(old_text), Record::text(new_text))
}

/// Membership-based sequence comparison: a set difference, not an
/// alignment. Elements present on both sides pass through verbatim.
fn sequence_difference(
    old_items: &[Record],
    new_items: &[Record],
    style: RenderStyle,
) -> (Record, Record) {
    let old_out = old_items
        .iter()
        .map(|item| {
            if new_items.contains(item) {
                item.clone()
            } else {
                annotate(item, Annotation::Removed, style)
            }
        })
        .collect();
    let new_out = new_items
        .iter()
        .map(|item| {
            if old_items.contains(item) {
                item.clone()
            } else {
                annotate(item, Annotation::Added, style)
            }
        })
        .collect();
    (Record::Sequence(old_out), Record::Sequence(new_out))
}

/// Marks an entire subtree added or removed, keys included. Scalars are
/// normalized with the same display rules as the character-level path.
///
/// A plain structural map: record depth is bounded by the data model, so
/// no frame stack is needed here.
fn annotate(record: &Record, tag: Annotation, style: RenderStyle) -> Record {
    match record {
        Record::Scalar(scalar) => Record::text(style.wrap(tag, &scalar.display())),
        Record::Sequence(items) => Record::Sequence(
            items.iter().map(|item| annotate(item, tag, style)).collect(),
        ),
        Record::Mapping(map) => Record::Mapping(
            map.iter()
                .map(|(key, value)| (style.wrap(tag, key), annotate(value, tag, style)))
                .collect(),
        ),
    }
}

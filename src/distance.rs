//! Unit-cost edit distance with full alignment reconstruction.
//!
//! [`distance`] fills a suffix-cost matrix bottom-up and returns the
//! minimal number of single-character insertions, removals, and
//! replacements transforming `source` into `target`. [`reconstruct`]
//! walks the same matrix forward and recovers the ordered edit sequence
//! realizing that distance.
//!
//! The matrix is filled iteratively, never through call-stack recursion:
//! inputs are paragraph-length strings and the recurrence depth would
//! otherwise track their length.
//!
//! # Examples
//!
//! ```
//! use tender_diff::{distance, reconstruct};
//!
//! let (dist, matrix) = distance("kitten", "sitting");
//! assert_eq!(dist, 3);
//!
//! let ops = reconstruct("kitten", "sitting", &matrix);
//! assert_eq!(ops.len(), 3);
//! ```

/// A single edit transforming the source sequence toward the target.
///
/// Matching characters are consumed silently during reconstruction; no
/// "keep" operation is ever emitted. Indices are character positions in
/// the respective input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Insert `target[target]` into the source.
    Insert { target: usize },
    /// Remove `source[source]`.
    Remove { source: usize },
    /// Replace `source[source]` with `target[target]`.
    Replace { source: usize, target: usize },
}

/// Suffix-cost matrix for one distance computation.
///
/// `at(i, j)` holds the minimal number of unit edits required to
/// transform the source suffix starting at `i` into the target suffix
/// starting at `j`. Both the fill and the reconstruction walk use this
/// one `(source, target)` accessor.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    cells: Vec<usize>,
    source_len: usize,
    target_len: usize,
}

impl CostMatrix {
    fn new(source_len: usize, target_len: usize) -> Self {
        Self {
            cells: vec![0; (source_len + 1) * (target_len + 1)],
            source_len,
            target_len,
        }
    }

    /// Cost of transforming `source[i..]` into `target[j..]`.
    pub fn at(&self, i: usize, j: usize) -> usize {
        self.cells[j * (self.source_len + 1) + i]
    }

    fn set(&mut self, i: usize, j: usize, cost: usize) {
        self.cells[j * (self.source_len + 1) + i] = cost;
    }

    /// Source length the matrix was computed for, in characters.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Target length the matrix was computed for, in characters.
    pub fn target_len(&self) -> usize {
        self.target_len
    }
}

/// Computes the edit distance between `source` and `target` and returns
/// it together with the filled cost matrix.
///
/// Unit-cost recurrence, no transposition. Empty inputs and identical
/// inputs fall out of the recurrence without special-casing: the
/// distance to or from an empty string is the other string's length,
/// and equal inputs cost zero. O(n·m) time and space.
pub fn distance(source: &str, target: &str) -> (usize, CostMatrix) {
    let src: Vec<char> = source.chars().collect();
    let tgt: Vec<char> = target.chars().collect();
    let mut matrix = CostMatrix::new(src.len(), tgt.len());

    // Fill from the suffix ends inward so every cell's three
    // continuations are already computed.
    for j in (0..=tgt.len()).rev() {
        for i in (0..=src.len()).rev() {
            let cost = if i == src.len() {
                // Source exhausted: pure insertions remain.
                tgt.len() - j
            } else if j == tgt.len() {
                // Target exhausted: pure removals remain.
                src.len() - i
            } else if src[i] == tgt[j] {
                matrix.at(i + 1, j + 1)
            } else {
                let remove = matrix.at(i + 1, j);
                let insert = matrix.at(i, j + 1);
                let replace = matrix.at(i + 1, j + 1);
                1 + replace.min(remove).min(insert)
            };
            matrix.set(i, j, cost);
        }
    }

    (matrix.at(0, 0), matrix)
}

/// Recovers the minimal ordered edit sequence from a filled cost matrix.
///
/// Walks forward from the start of both strings, consuming matching
/// characters silently. On a mismatch the three continuation cells are
/// compared and the minimum taken; ties break in the order replace,
/// remove, insert, so output is deterministic. Whatever remains of
/// either string once the other is exhausted flushes as a run of pure
/// inserts or removes. The result length always equals the computed
/// distance.
pub fn reconstruct(source: &str, target: &str, matrix: &CostMatrix) -> Vec<EditOp> {
    let src: Vec<char> = source.chars().collect();
    let tgt: Vec<char> = target.chars().collect();
    let mut ops = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);

    while i < src.len() && j < tgt.len() {
        if src[i] == tgt[j] {
            i += 1;
            j += 1;
            continue;
        }

        let remove = matrix.at(i + 1, j);
        let insert = matrix.at(i, j + 1);
        let replace = matrix.at(i + 1, j + 1);
        let best = replace.min(remove).min(insert);

        if replace == best {
            ops.push(EditOp::Replace { source: i, target: j });
            i += 1;
            j += 1;
        } else if remove == best {
            ops.push(EditOp::Remove { source: i });
            i += 1;
        } else {
            ops.push(EditOp::Insert { target: j });
            j += 1;
        }
    }

    if j < tgt.len() {
        // A still-matching boundary pair is consumed silently, not flushed.
        if i < src.len() && src[i] == tgt[j] {
            j += 1;
        }
        ops.extend((j..tgt.len()).map(|target| EditOp::Insert { target }));
    } else if i < src.len() {
        if j < tgt.len() && src[i] == tgt[j] {
            i += 1;
        }
        ops.extend((i..src.len()).map(|source| EditOp::Remove { source }));
    }

    ops
}

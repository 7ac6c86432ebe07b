//! Rendering of edit sequences into annotated text pairs.
//!
//! Takes a source/target pair plus the edit operations between them and
//! produces two strings suitable for display side by side: the source
//! with removals highlighted, the target with insertions and in-place
//! modifications highlighted. Two interchangeable styles exist — ANSI
//! escapes for terminals and `<span>` markup for HTML embedding.

use crate::distance::EditOp;
use colored::Colorize;

/// Change tag attached to a value for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Unchanged,
    Added,
    Removed,
    Modified,
}

/// Rendering target for annotated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// ANSI background colors for terminal display.
    Terminal,
    /// HTML span classes, with faded placeholder variants.
    Markup,
}

/// Stylesheet backing the markup classes emitted by [`RenderStyle::Markup`].
///
/// The class set is a fixed contract: `added`, `removed`, `modified`,
/// plus the faded counterparts shown on the side that carries a
/// placeholder instead of real content.
pub const STYLESHEET: &str = "\
p { text-align: justify; }
dt { font-weight: bold; }
.removed { background-color: #bf616a; color: #d8dee9; }
.removed-fade { background-color: #bf616a; color: #bf616a; }
.added { background-color: #a3be8c; color: #4c566a; }
.added-fade { background-color: #a3be8c; color: #a3be8c; }
.modified { background-color: #ebcb8b; color: #4c566a; }
";

impl RenderStyle {
    /// Wraps `text` in the visual treatment for `tag`.
    pub fn wrap(&self, tag: Annotation, text: &str) -> String {
        match (self, tag) {
            (_, Annotation::Unchanged) => text.to_string(),
            (RenderStyle::Terminal, Annotation::Added) => {
                text.bright_white().on_green().to_string()
            }
            (RenderStyle::Terminal, Annotation::Removed) => {
                text.bright_white().on_red().to_string()
            }
            (RenderStyle::Terminal, Annotation::Modified) => {
                text.bright_white().on_yellow().to_string()
            }
            (RenderStyle::Markup, Annotation::Added) => {
                format!("<span class=\"added\">{text}</span>")
            }
            (RenderStyle::Markup, Annotation::Removed) => {
                format!("<span class=\"removed\">{text}</span>")
            }
            (RenderStyle::Markup, Annotation::Modified) => {
                format!("<span class=\"modified\">{text}</span>")
            }
        }
    }

    /// Placeholder shown on the source side opposite an inserted character.
    fn added_placeholder(&self) -> String {
        match self {
            RenderStyle::Terminal => " ".on_green().to_string(),
            RenderStyle::Markup => r#"<span class="added-fade">_</span>"#.to_string(),
        }
    }

    /// Placeholder shown on the target side opposite a removed character.
    fn removed_placeholder(&self) -> String {
        match self {
            RenderStyle::Terminal => " ".on_red().to_string(),
            RenderStyle::Markup => r#"<span class="removed-fade">-</span>"#.to_string(),
        }
    }
}

/// Renders `source` and `target` with `ops` applied as highlights.
///
/// Operations must come from [`crate::reconstruct`] for this pair.
/// Unchanged runs between operations are copied verbatim to both sides,
/// as are the trailing suffixes; with an empty operation list both
/// outputs equal their inputs exactly. Text is embedded as-is — callers
/// feed plain text and own any entity escaping for the markup style.
pub fn render(source: &str, target: &str, ops: &[EditOp], style: RenderStyle) -> (String, String) {
    let src: Vec<char> = source.chars().collect();
    let tgt: Vec<char> = target.chars().collect();
    let mut out_src = String::new();
    let mut out_tgt = String::new();
    let (mut i, mut j) = (0usize, 0usize);

    for op in ops {
        match *op {
            EditOp::Insert { target: at } => {
                let run = at - j;
                out_src.extend(&src[i..i + run]);
                out_src.push_str(&style.added_placeholder());
                out_tgt.extend(&tgt[j..at]);
                out_tgt.push_str(&style.wrap(Annotation::Added, &tgt[at].to_string()));
                i += run;
                j = at + 1;
            }
            EditOp::Remove { source: at } => {
                let run = at - i;
                out_src.extend(&src[i..at]);
                out_src.push_str(&style.wrap(Annotation::Removed, &src[at].to_string()));
                out_tgt.extend(&tgt[j..j + run]);
                out_tgt.push_str(&style.removed_placeholder());
                i = at + 1;
                j += run;
            }
            EditOp::Replace { source: s_at, target: t_at } => {
                // The source side keeps its character plain; the change
                // shows on the target side.
                out_src.extend(&src[i..s_at]);
                out_src.push(src[s_at]);
                out_tgt.extend(&tgt[j..t_at]);
                out_tgt.push_str(&style.wrap(Annotation::Modified, &tgt[t_at].to_string()));
                i = s_at + 1;
                j = t_at + 1;
            }
        }
    }

    out_src.extend(&src[i..]);
    out_tgt.extend(&tgt[j..]);
    (out_src, out_tgt)
}

//! Presentation assembly for diff results.
//!
//! Renders the annotated `(old, new)` pair produced by [`crate::diff`]
//! for a destination-agnostic consumer: indented terminal text, a
//! standalone HTML document embedding the highlight stylesheet, or the
//! annotated records serialized as plain JSON. The destination itself
//! (printer, message body, file) is the caller's business.

use crate::error::OutputError;
use crate::record::{Record, Scalar};
use crate::render::STYLESHEET;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented text for terminal display.
    Terminal,
    /// Standalone HTML document with the highlight stylesheet embedded.
    Html,
    /// Annotated records serialized as JSON.
    Json,
}

/// Options for report assembly.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Heading used by the HTML document and the terminal header.
    pub title: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Record changes".to_string(),
        }
    }
}

/// Formats an annotated record pair according to the requested format.
///
/// # Examples
///
/// ```
/// use tender_diff::{diff, parse_json, format_result, OutputFormat, RenderStyle, ReportOptions};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let old = parse_json(r#"{"Documents": 12}"#)?;
/// let new = parse_json(r#"{"Documents": 13}"#)?;
/// let (old_marked, new_marked) = diff(&old, &new, RenderStyle::Markup)?;
///
/// let html = format_result(&old_marked, &new_marked, &OutputFormat::Html, &ReportOptions::default())?;
/// assert!(html.contains("<dl>"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn format_result(
    old: &Record,
    new: &Record,
    format: &OutputFormat,
    options: &ReportOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_terminal(old, new, options)),
        OutputFormat::Html => Ok(format_html(old, new, options)),
        OutputFormat::Json => format_json(old, new),
    }
}

fn format_terminal(old: &Record, new: &Record, options: &ReportOptions) -> String {
    let rule = "─".repeat(60);
    let mut out = String::new();

    out.push_str(&options.title);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str("From:\n");
    write_text(old, 1, &mut out);
    out.push_str(&rule);
    out.push('\n');
    out.push_str("To:\n");
    write_text(new, 1, &mut out);

    out
}

/// Indented plain-text rendering. Scalar mapping values share a line
/// with their key; containers open a nested block.
fn write_text(record: &Record, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match record {
        Record::Scalar(scalar) => {
            out.push_str(&pad);
            out.push_str(&scalar.display());
            out.push('\n');
        }
        Record::Sequence(items) => {
            for item in items {
                match item {
                    Record::Scalar(scalar) => {
                        out.push_str(&pad);
                        out.push_str("- ");
                        out.push_str(&scalar.display());
                        out.push('\n');
                    }
                    _ => {
                        out.push_str(&pad);
                        out.push_str("-\n");
                        write_text(item, indent + 1, out);
                    }
                }
            }
        }
        Record::Mapping(map) => {
            for (key, value) in map {
                match value {
                    Record::Scalar(scalar) => {
                        out.push_str(&pad);
                        out.push_str(key);
                        out.push_str(": ");
                        out.push_str(&scalar.display());
                        out.push('\n');
                    }
                    _ => {
                        out.push_str(&pad);
                        out.push_str(key);
                        out.push_str(":\n");
                        write_text(value, indent + 1, out);
                    }
                }
            }
        }
    }
}

fn format_html(old: &Record, new: &Record, options: &ReportOptions) -> String {
    let mut old_html = String::new();
    write_html(old, &mut old_html);
    let mut new_html = String::new();
    write_html(new, &mut new_html);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <h2>From</h2>\n\
         {old_html}\n\
         <h2>To</h2>\n\
         {new_html}\n\
         </body>\n\
         </html>\n",
        title = options.title,
    )
}

/// Mappings become definition lists, sequences become unordered lists,
/// scalars their normalized display text (which may already carry
/// highlight spans).
fn write_html(record: &Record, out: &mut String) {
    match record {
        Record::Scalar(scalar) => out.push_str(&scalar.display()),
        Record::Sequence(items) => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                write_html(item, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Record::Mapping(map) => {
            out.push_str("<dl>");
            for (key, value) in map {
                out.push_str("<dt>");
                out.push_str(key);
                out.push_str("</dt><dd>");
                write_html(value, out);
                out.push_str("</dd>");
            }
            out.push_str("</dl>");
        }
    }
}

fn format_json(old: &Record, new: &Record) -> Result<String, OutputError> {
    let mut doc = serde_json::Map::new();
    doc.insert(
        "old".to_string(),
        serde_json::to_value(old).map_err(|e| OutputError::JsonSerializationError { source: e })?,
    );
    doc.insert(
        "new".to_string(),
        serde_json::to_value(new).map_err(|e| OutputError::JsonSerializationError { source: e })?,
    );
    serde_json::to_string_pretty(&serde_json::Value::Object(doc))
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

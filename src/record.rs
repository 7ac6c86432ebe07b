//! Structured record model for tender snapshots.

use indexmap::IndexMap;
use serde::Serialize;

/// A scalar leaf in a tender record.
///
/// Integers and floats stay distinct so that display normalization can
/// format them differently (see [`Scalar::display`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

/// A value in a structured tender record: a scalar leaf, an ordered
/// sequence, or a mapping.
///
/// Mappings compare by key set (insertion order is irrelevant for
/// equality) but preserve insertion order for output, which is why the
/// backing store is an [`IndexMap`]. Records are finite, acyclic trees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Scalar(Scalar),
    Sequence(Vec<Record>),
    Mapping(IndexMap<String, Record>),
}

impl Scalar {
    /// Normalizes the scalar to its display string: integers with
    /// grouping separators, floats with fixed 3-decimal precision and
    /// grouping, strings verbatim.
    ///
    /// This normalized text is what the character-level diff operates on,
    /// not the raw value.
    pub fn display(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Int(n) => {
                let sign = if *n < 0 { "-" } else { "" };
                format!("{sign}{}", group_digits(&n.unsigned_abs().to_string()))
            }
            Scalar::Float(f) => {
                if !f.is_finite() {
                    return f.to_string();
                }
                let fixed = format!("{f:.3}");
                let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));
                let (sign, digits) = match whole.strip_prefix('-') {
                    Some(rest) => ("-", rest),
                    None => ("", whole),
                };
                format!("{sign}{}.{frac}", group_digits(digits))
            }
        }
    }
}

impl Record {
    /// Shorthand for a text scalar.
    pub fn text(value: impl Into<String>) -> Self {
        Record::Scalar(Scalar::Text(value.into()))
    }

    /// Shape name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Scalar(Scalar::Text(_)) => "string",
            Record::Scalar(Scalar::Int(_)) => "integer",
            Record::Scalar(Scalar::Float(_)) => "float",
            Record::Sequence(_) => "sequence",
            Record::Mapping(_) => "mapping",
        }
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Record::text(value)
    }
}

impl From<String> for Record {
    fn from(value: String) -> Self {
        Record::text(value)
    }
}

impl From<i64> for Record {
    fn from(value: i64) -> Self {
        Record::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Record {
    fn from(value: f64) -> Self {
        Record::Scalar(Scalar::Float(value))
    }
}

/// Inserts a thousands separator every three digits, counting from the
/// right. Expects an unsigned digit string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

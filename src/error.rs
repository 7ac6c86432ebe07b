//! Custom error types for tender-diff.

/// Errors raised while decoding a snapshot document into a record.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Snapshot not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read snapshot {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid YAML: {source}")]
    YamlError {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },

    #[error("Could not detect snapshot format for {path}")]
    UnknownFormat { path: String },

    #[error("Unsupported value at {path}: {found} has no record representation")]
    UnsupportedValue { path: String, found: String },
}

/// Errors raised by the structural differ.
///
/// A failed diff produces no partial result; the caller decides whether
/// to retry or ignore.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("Shape mismatch at {path}: cannot diff {old_kind} against {new_kind}")]
    ShapeMismatch {
        path: String,
        old_kind: &'static str,
        new_kind: &'static str,
    },
}

/// Errors raised while assembling report output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize result to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

/// Umbrella error for library consumers.
#[derive(Debug, thiserror::Error)]
pub enum TenderDiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::UnknownFormat { path: path.into() }
    }

    pub fn unsupported_value(path: &[String], found: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            path: format_path(path),
            found: found.into(),
        }
    }
}

impl DiffError {
    pub fn shape_mismatch(path: &[String], old_kind: &'static str, new_kind: &'static str) -> Self {
        Self::ShapeMismatch {
            path: format_path(path),
            old_kind,
            new_kind,
        }
    }
}

/// Joins a key path for display; the empty path is the record root.
fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        return "(root)".to_string();
    }

    let mut result = String::new();
    for (idx, segment) in path.iter().enumerate() {
        if segment.starts_with('[') {
            result.push_str(segment);
        } else {
            if idx > 0 {
                result.push('.');
            }
            result.push_str(segment);
        }
    }
    result
}

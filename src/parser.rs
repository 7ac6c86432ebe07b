//! Snapshot parsing for JSON, YAML, and TOML documents.
//!
//! Decodes an already-retrieved snapshot document into the [`Record`]
//! model. Format is detected by file extension, falling back to trying
//! each parser in turn when the extension is unknown. The record model
//! is deliberately narrow: values other than strings, numbers,
//! sequences, and mappings (booleans, nulls, datetimes) are rejected
//! with the offending path rather than coerced.
//!
//! # Examples
//!
//! ```no_run
//! use tender_diff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = parse_file(Path::new("snapshots/tenders.json"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::record::{Record, Scalar};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Parses a snapshot file into a [`Record`].
///
/// The format is detected by extension (`.json`, `.yaml`, `.yml`,
/// `.toml`). An unknown or missing extension falls back to attempting
/// JSON, then YAML, then TOML.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, if no parser
/// accepts the content, or if the document contains a value the record
/// model cannot represent.
pub fn parse_file(path: &Path) -> Result<Record, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some("json") => parse_json(&content),
        Some("yaml") | Some("yml") => parse_yaml(&content),
        Some("toml") => parse_toml(&content),
        _ => parse_json(&content)
            .or_else(|_| parse_yaml(&content))
            .or_else(|_| parse_toml(&content))
            .map_err(|_| ParseError::unknown_format(path.to_string_lossy().to_string())),
    }
}

/// Parses a JSON document into a [`Record`].
pub fn parse_json(content: &str) -> Result<Record, ParseError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    json_to_record(&value, &mut Vec::new())
}

/// Parses a YAML document into a [`Record`].
pub fn parse_yaml(content: &str) -> Result<Record, ParseError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    yaml_to_record(&value, &mut Vec::new())
}

/// Parses a TOML document into a [`Record`].
pub fn parse_toml(content: &str) -> Result<Record, ParseError> {
    let value: toml::Value = toml::from_str(content)?;
    toml_to_record(&value, &mut Vec::new())
}

fn json_to_record(value: &serde_json::Value, path: &mut Vec<String>) -> Result<Record, ParseError> {
    match value {
        serde_json::Value::String(s) => Ok(Record::Scalar(Scalar::Text(s.clone()))),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Record::Scalar(Scalar::Int(i)))
            } else if let Some(f) = n.as_f64() {
                Ok(Record::Scalar(Scalar::Float(f)))
            } else {
                Err(ParseError::unsupported_value(path, "number"))
            }
        }
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                path.push(format!("[{idx}]"));
                out.push(json_to_record(item, path)?);
                path.pop();
            }
            Ok(Record::Sequence(out))
        }
        serde_json::Value::Object(map) => {
            let mut out = IndexMap::with_capacity(map.len());
            for (key, item) in map {
                path.push(key.clone());
                let converted = json_to_record(item, path)?;
                path.pop();
                out.insert(key.clone(), converted);
            }
            Ok(Record::Mapping(out))
        }
        serde_json::Value::Null => Err(ParseError::unsupported_value(path, "null")),
        serde_json::Value::Bool(_) => Err(ParseError::unsupported_value(path, "boolean")),
    }
}

fn yaml_to_record(value: &serde_yaml::Value, path: &mut Vec<String>) -> Result<Record, ParseError> {
    match value {
        serde_yaml::Value::String(s) => Ok(Record::Scalar(Scalar::Text(s.clone()))),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Record::Scalar(Scalar::Int(i)))
            } else if let Some(f) = n.as_f64() {
                Ok(Record::Scalar(Scalar::Float(f)))
            } else {
                Err(ParseError::unsupported_value(path, "number"))
            }
        }
        serde_yaml::Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                path.push(format!("[{idx}]"));
                out.push(yaml_to_record(item, path)?);
                path.pop();
            }
            Ok(Record::Sequence(out))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = IndexMap::with_capacity(map.len());
            for (key, item) in map {
                // YAML allows non-string keys; numbers are stringified.
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    _ => return Err(ParseError::unsupported_value(path, "non-string mapping key")),
                };
                path.push(key.clone());
                let converted = yaml_to_record(item, path)?;
                path.pop();
                out.insert(key, converted);
            }
            Ok(Record::Mapping(out))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_record(&tagged.value, path),
        serde_yaml::Value::Null => Err(ParseError::unsupported_value(path, "null")),
        serde_yaml::Value::Bool(_) => Err(ParseError::unsupported_value(path, "boolean")),
    }
}

fn toml_to_record(value: &toml::Value, path: &mut Vec<String>) -> Result<Record, ParseError> {
    match value {
        toml::Value::String(s) => Ok(Record::Scalar(Scalar::Text(s.clone()))),
        toml::Value::Integer(i) => Ok(Record::Scalar(Scalar::Int(*i))),
        toml::Value::Float(f) => Ok(Record::Scalar(Scalar::Float(*f))),
        toml::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (idx, item) in items.iter().enumerate() {
                path.push(format!("[{idx}]"));
                out.push(toml_to_record(item, path)?);
                path.pop();
            }
            Ok(Record::Sequence(out))
        }
        toml::Value::Table(table) => {
            let mut out = IndexMap::with_capacity(table.len());
            for (key, item) in table {
                path.push(key.clone());
                let converted = toml_to_record(item, path)?;
                path.pop();
                out.insert(key.clone(), converted);
            }
            Ok(Record::Mapping(out))
        }
        toml::Value::Boolean(_) => Err(ParseError::unsupported_value(path, "boolean")),
        toml::Value::Datetime(_) => Err(ParseError::unsupported_value(path, "datetime")),
    }
}

//! Error handling for the casekit conversion library.
//!
//! This module defines the main error type `Error` used throughout the
//! library, along with a convenient `Result` type alias, and the
//! `ValueKind` classification of non-string inputs. It uses `thiserror`
//! for easy error handling.
//!
//! The message produced for each `ValueKind` is part of the public
//! contract: callers match on the rendered text, so the templates below
//! must not change shape.

use std::fmt;

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Result type for casekit conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for casekit conversion operations.
///
/// Once an input has passed validation, conversion is total over all
/// strings, so a type mismatch is the only failure the core can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The caller supplied something other than a string
    #[error("Expected string, received {0}")]
    TypeMismatch(ValueKind),
}

/// Runtime category of a value that failed string validation.
///
/// A closed set of variants, each with its own message template. The
/// rendering of the offending value is captured at classification time
/// so formatting stays decoupled from type inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// An explicit null value
    Null,
    /// The value was absent entirely
    Missing,
    /// A numeric value
    Number(serde_json::Number),
    /// An array; elements are kept for a comma-joined rendering
    Sequence(Vec<JsonValue>),
    /// An object/map; entries are kept for a key:value rendering
    Mapping(serde_json::Map<String, JsonValue>),
    /// A boolean literal
    Boolean(bool),
    /// Anything else a non-JSON input carrier may report: a type name
    /// plus a best-effort rendering of the value
    Other(&'static str, String),
}

impl ValueKind {
    /// Classify a JSON value. String values never reach classification;
    /// if one does it is reported through the `Other` fallback.
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Bool(b) => ValueKind::Boolean(*b),
            JsonValue::Number(n) => ValueKind::Number(n.clone()),
            JsonValue::Array(items) => ValueKind::Sequence(items.clone()),
            JsonValue::Object(map) => ValueKind::Mapping(map.clone()),
            JsonValue::String(s) => ValueKind::Other("string", s.clone()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Missing => write!(f, "undefined"),
            ValueKind::Number(n) => write!(f, "number: {}", n),
            ValueKind::Sequence(items) => {
                write!(f, "array: [{}]", join_elements(items))
            }
            ValueKind::Mapping(map) => {
                write!(f, "object: {}", JsonValue::Object(map.clone()))
            }
            ValueKind::Boolean(b) => write!(f, "boolean: {}", b),
            ValueKind::Other(type_name, repr) => {
                write!(f, "{}: {}", type_name, repr)
            }
        }
    }
}

/// Comma-join array elements; strings render bare, everything else as
/// compact JSON.
fn join_elements(items: &[JsonValue]) -> String {
    items
        .iter()
        .map(|value| match value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

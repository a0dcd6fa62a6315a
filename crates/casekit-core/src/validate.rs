//! Input validation guard shared by every conversion entry point.
//!
//! Conversion accepts dynamically typed values at its boundary (path
//! parameters, JSON payloads, CLI arguments parsed as JSON). The guard
//! type-checks the value before any tokenization happens and trims the
//! surviving string. Categories are checked in a fixed priority order:
//! missing, null, number, array, object, boolean, then everything else.

use serde_json::Value as JsonValue;

use crate::error::{Error, Result, ValueKind};

/// Validate a dynamically typed input and normalize it to a trimmed
/// string. `None` represents an absent value and maps to the
/// `undefined` message category.
pub fn validate(input: Option<&JsonValue>) -> Result<String> {
    match input {
        None => Err(Error::TypeMismatch(ValueKind::Missing)),
        Some(JsonValue::String(s)) => Ok(s.trim().to_string()),
        Some(value) => Err(Error::TypeMismatch(ValueKind::of(value))),
    }
}

/// A caller-supplied value of unconstrained type.
///
/// Implemented for plain string slices (which cannot fail validation)
/// and for JSON values, so the same conversion functions serve both the
/// typed and the dynamic surface.
pub trait RawInput {
    /// Type-check the value and trim surrounding whitespace.
    fn normalize(self) -> Result<String>;
}

impl RawInput for &str {
    fn normalize(self) -> Result<String> {
        Ok(self.trim().to_string())
    }
}

impl RawInput for &String {
    fn normalize(self) -> Result<String> {
        Ok(self.trim().to_string())
    }
}

impl RawInput for &JsonValue {
    fn normalize(self) -> Result<String> {
        validate(Some(self))
    }
}

impl RawInput for Option<&JsonValue> {
    fn normalize(self) -> Result<String> {
        validate(self)
    }
}

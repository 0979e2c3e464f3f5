//! Decoding frequency maps from untyped input.
//!
//! Typed callers hand a map straight to
//! [`TableDescriptor::from_frequencies`](crate::TableDescriptor::from_frequencies).
//! This module covers the other boundary: a JSON document whose shape is only
//! known at runtime. Anything that is not an object of non-negative integers
//! is rejected with [`FreqTableError::InvalidInput`] before a single row is
//! built.

use std::io::Read;

use serde_json::Value;

use crate::error::FreqTableError;
use crate::Result;

/// Decode a JSON value into `(word, count)` entries.
///
/// Entries keep the key order of the JSON object.
pub fn frequencies_from_value(value: &Value) -> Result<Vec<(String, u64)>> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(FreqTableError::invalid_input(format!(
                "expected an object mapping words to counts, found {}",
                kind_of(other)
            )))
        }
    };

    object
        .iter()
        .map(|(word, count)| {
            count_of(count)
                .map(|count| (word.clone(), count))
                .ok_or_else(|| {
                    FreqTableError::invalid_input(format!(
                        "count for '{}' must be a non-negative integer, found {}",
                        word, count
                    ))
                })
        })
        .collect()
}

/// Parse JSON text and decode it into `(word, count)` entries.
pub fn frequencies_from_str(input: &str) -> Result<Vec<(String, u64)>> {
    let value: Value = serde_json::from_str(input)?;
    frequencies_from_value(&value)
}

/// Read JSON from `reader` and decode it into `(word, count)` entries.
///
/// Failures of the reader itself surface as `Io`; malformed bytes, including
/// invalid UTF-8, surface as `Json`.
pub fn frequencies_from_reader<R: Read>(reader: R) -> Result<Vec<(String, u64)>> {
    let value: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            FreqTableError::Io(e.into())
        } else {
            FreqTableError::Json(e)
        }
    })?;
    frequencies_from_value(&value)
}

/// Counts are non-negative integers; `5.0` counts as the integer 5.
fn count_of(value: &Value) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    value
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
        .map(|f| f as u64)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

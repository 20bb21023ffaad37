//! Text encoding for the list columns of `daily_data`.
//!
//! Lists are stored as JSON arrays. This is the only place that crosses the
//! text/value boundary; everything above it works with `Vec<Value>`.

use serde_json::Value;

use crate::error::{AppError, AppResult};

pub fn encode_list(items: &[Value]) -> String {
    Value::Array(items.to_vec()).to_string()
}

/// Decodes a stored list. NULL, empty text and a JSON `null` all read as an
/// empty list; anything else that is not an array is corrupt.
pub fn decode_list(column: &'static str, key: &str, raw: Option<&str>) -> AppResult<Vec<Value>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(Vec::new()),
        Some(raw) => raw,
    };

    serde_json::from_str::<Option<Vec<Value>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|source| AppError::CorruptData {
            column,
            key: key.to_string(),
            source,
        })
}

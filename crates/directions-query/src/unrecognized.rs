//! Unknown request options carried through to the query string.

use directions_json::Unrecognized;
use serde_json::Value;

use crate::error::QueryError;

/// Projects unrecognized options into `(key, value)` query pairs in store
/// order. Strings are emitted without quotes. Arrays, objects and `null`
/// have no query form and fail with [`QueryError::NonPrimitive`].
pub fn unrecognized_query_pairs(
    unrecognized: &Unrecognized,
) -> Result<Vec<(String, String)>, QueryError> {
    unrecognized
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    return Err(QueryError::NonPrimitive(key.to_string()));
                }
            };
            Ok((key.to_string(), rendered))
        })
        .collect()
}

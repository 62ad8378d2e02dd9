//! Decode error taxonomy shared by every node codec.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input text is not valid JSON.
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Required fields were absent (or explicitly `null`) once the whole
    /// object had been consumed. Lists every missing field, not just the first.
    #[error("{type_name}: missing required properties: {}", .fields.join(" "))]
    MissingRequired {
        type_name: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{type_name}.{field}: expected {expected}, found {found}")]
    TypeMismatch {
        type_name: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Failure reported by the serde-derived default codec of a nested node.
    #[error("{type_name}: {source}")]
    DefaultCodec {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn type_mismatch(
        type_name: &'static str,
        field: impl Into<String>,
        expected: &'static str,
        found: &Value,
    ) -> Self {
        DecodeError::TypeMismatch {
            type_name,
            field: field.into(),
            expected,
            found: value_kind(found),
        }
    }

    /// Names of the missing required fields, empty for other variants.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            DecodeError::MissingRequired { fields, .. } => fields,
            _ => &[],
        }
    }
}

/// JSON kind name used in mismatch messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Collects required-field presence and fails with every missing name at once.
pub fn require(
    type_name: &'static str,
    checks: &[(&'static str, bool)],
) -> Result<(), DecodeError> {
    let fields: Vec<&'static str> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(DecodeError::MissingRequired { type_name, fields })
    }
}

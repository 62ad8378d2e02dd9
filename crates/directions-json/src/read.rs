//! Typed field decoders.
//!
//! Each helper takes ownership of one member value (already known to be
//! non-null) and either converts it to the declared Rust type or fails with
//! [`DecodeError::TypeMismatch`] naming the node type and field.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::codec::JsonCodec;
use crate::error::DecodeError;
use crate::intern::StringPool;
use crate::unrecognized::Unrecognized;

/// Object members in input order with explicit `null` members dropped:
/// a `null` member is treated exactly like an omitted one.
pub fn members(object: Map<String, Value>) -> impl Iterator<Item = (String, Value)> {
    object.into_iter().filter(|(_, value)| !value.is_null())
}

/// Stores a member the node does not know about.
pub fn capture(store: &mut Unrecognized, type_name: &'static str, name: String, value: Value) {
    tracing::debug!(type_name, field = %name, "captured unrecognized field");
    store.insert(name, value);
}

pub fn string(type_name: &'static str, field: &str, value: Value) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(DecodeError::type_mismatch(type_name, field, "string", &other)),
    }
}

pub fn interned(
    type_name: &'static str,
    field: &str,
    value: Value,
    pool: &mut StringPool,
) -> Result<Arc<str>, DecodeError> {
    match value {
        Value::String(s) => Ok(pool.intern(&s)),
        other => Err(DecodeError::type_mismatch(type_name, field, "string", &other)),
    }
}

pub fn boolean(type_name: &'static str, field: &str, value: Value) -> Result<bool, DecodeError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(DecodeError::type_mismatch(type_name, field, "boolean", &other)),
    }
}

/// 32-bit integer. Integral floats such as `80.0` are accepted.
pub fn int(type_name: &'static str, field: &str, value: Value) -> Result<i32, DecodeError> {
    let parsed = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|i| i32::try_from(i).ok()),
        _ => None,
    };
    parsed.ok_or_else(|| DecodeError::type_mismatch(type_name, field, "integer", &value))
}

pub fn float(type_name: &'static str, field: &str, value: Value) -> Result<f64, DecodeError> {
    match &value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| DecodeError::type_mismatch(type_name, field, "number", &value)),
        _ => Err(DecodeError::type_mismatch(type_name, field, "number", &value)),
    }
}

/// `[longitude, latitude]`.
pub fn coordinate(
    type_name: &'static str,
    field: &str,
    value: Value,
) -> Result<[f64; 2], DecodeError> {
    let items = array(type_name, field, value, "coordinate pair")?;
    if items.len() != 2 {
        return Err(DecodeError::TypeMismatch {
            type_name,
            field: field.to_string(),
            expected: "coordinate pair",
            found: "array of wrong length",
        });
    }
    let mut out = [0.0; 2];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = float(type_name, field, item)?;
    }
    Ok(out)
}

pub fn string_list(
    type_name: &'static str,
    field: &str,
    value: Value,
) -> Result<Vec<String>, DecodeError> {
    array(type_name, field, value, "array of strings")?
        .into_iter()
        .map(|item| string(type_name, field, item))
        .collect()
}

pub fn interned_list(
    type_name: &'static str,
    field: &str,
    value: Value,
    pool: &mut StringPool,
) -> Result<Vec<Arc<str>>, DecodeError> {
    array(type_name, field, value, "array of strings")?
        .into_iter()
        .map(|item| interned(type_name, field, item, pool))
        .collect()
}

pub fn bool_list(
    type_name: &'static str,
    field: &str,
    value: Value,
) -> Result<Vec<bool>, DecodeError> {
    array(type_name, field, value, "array of booleans")?
        .into_iter()
        .map(|item| boolean(type_name, field, item))
        .collect()
}

pub fn int_list(
    type_name: &'static str,
    field: &str,
    value: Value,
) -> Result<Vec<i32>, DecodeError> {
    array(type_name, field, value, "array of integers")?
        .into_iter()
        .map(|item| int(type_name, field, item))
        .collect()
}

/// Nested node through its own codec. Errors from the nested decode
/// propagate unchanged.
pub fn node<N: JsonCodec>(
    type_name: &'static str,
    field: &str,
    value: Value,
    pool: &mut StringPool,
) -> Result<N, DecodeError> {
    match value {
        Value::Object(object) => N::decode_object(object, pool),
        other => Err(DecodeError::type_mismatch(type_name, field, "object", &other)),
    }
}

pub fn node_list<N: JsonCodec>(
    type_name: &'static str,
    field: &str,
    value: Value,
    pool: &mut StringPool,
) -> Result<Vec<N>, DecodeError> {
    array(type_name, field, value, "array of objects")?
        .into_iter()
        .map(|item| node(type_name, field, item, pool))
        .collect()
}

fn array(
    type_name: &'static str,
    field: &str,
    value: Value,
    expected: &'static str,
) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DecodeError::type_mismatch(type_name, field, expected, &other)),
    }
}

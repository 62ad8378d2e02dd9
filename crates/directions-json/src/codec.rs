//! The node codec trait, the default-codec shim, and text entry points.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::CodecConfig;
use crate::error::{require, DecodeError};
use crate::intern::StringPool;
use crate::unrecognized::{HasUnrecognized, Unrecognized};
use crate::write::ObjectWriter;

// ── Trait ─────────────────────────────────────────────────────────────────

/// A model node with an explicit JSON codec.
///
/// Implementors decode one JSON object member by member, keeping anything
/// they do not recognise in their [`Unrecognized`](crate::Unrecognized)
/// store, and encode their known fields in [`JsonCodec::FIELDS`] order.
/// Unknown fields are always written after the known ones.
pub trait JsonCodec: HasUnrecognized + Sized {
    const TYPE_NAME: &'static str;

    /// Known JSON member names in declared (encode) order.
    const FIELDS: &'static [&'static str];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError>;

    /// Writes the known fields only.
    fn encode_object(&self, writer: &mut ObjectWriter<'_>);

    /// `null` decodes to `None`; anything other than an object is a mismatch.
    fn decode_value(value: Value, pool: &mut StringPool) -> Result<Option<Self>, DecodeError> {
        match value {
            Value::Null => Ok(None),
            Value::Object(object) => {
                tracing::trace!(type_name = Self::TYPE_NAME, "decoding node");
                Self::decode_object(object, pool).map(Some)
            }
            other => Err(DecodeError::type_mismatch(
                Self::TYPE_NAME,
                "$",
                "object",
                &other,
            )),
        }
    }

    fn encode_value(&self, config: &CodecConfig) -> Value {
        let mut writer = ObjectWriter::new(Self::TYPE_NAME, config);
        self.encode_object(&mut writer);
        writer.unrecognized(self.unrecognized());
        writer.into_value()
    }

    /// Decodes with a fresh string pool scoped to this call.
    fn from_json(json: &str) -> Result<Option<Self>, DecodeError> {
        Decoder::new().decode(json)
    }

    fn to_json(&self) -> String {
        Encoder::new().encode(self)
    }
}

// ── Default codec shim ────────────────────────────────────────────────────

/// Decodes a node through its serde derive. Explicit `null` members are
/// dropped first so they behave like omitted ones, as in the custom codecs.
/// Every name in `required` that is still absent is reported together
/// before serde sees the object.
pub fn decode_default<T: DeserializeOwned>(
    type_name: &'static str,
    required: &[&'static str],
    object: Map<String, Value>,
) -> Result<T, DecodeError> {
    let object: Map<String, Value> = crate::read::members(object).collect();
    let checks: Vec<(&'static str, bool)> = required
        .iter()
        .map(|name| (*name, object.contains_key(*name)))
        .collect();
    require(type_name, &checks)?;
    serde_json::from_value(Value::Object(object))
        .map_err(|source| DecodeError::DefaultCodec { type_name, source })
}

/// Writes the known fields of a serde-derived node in `fields` order.
///
/// The flattened unknown store would overwrite a known member of the same
/// name, so a node whose store shadows one of `fields` is serialized from a
/// copy with the store emptied. The shadowing entry is then dropped by
/// [`ObjectWriter::unrecognized`] like for every other node.
pub fn encode_default<T>(node: &T, fields: &[&str], writer: &mut ObjectWriter<'_>)
where
    T: Serialize + Clone + HasUnrecognized,
{
    let shadowed = node.unrecognized().names().any(|name| fields.contains(&name));
    let serialized = if shadowed {
        let mut known = node.clone();
        *known.unrecognized_mut() = Unrecognized::new();
        serde_json::to_value(&known)
    } else {
        serde_json::to_value(node)
    };
    // Derived struct impls with string-keyed fields always serialize to an
    // object; serde_json only fails on non-string map keys.
    let Ok(Value::Object(serialized)) = serialized else {
        return;
    };
    writer.known_from_serialized(fields, serialized);
}

// ── Entry points ──────────────────────────────────────────────────────────

/// Decodes JSON text into nodes, sharing one string pool across calls.
#[derive(Debug, Default)]
pub struct Decoder {
    pool: StringPool,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        let pool = match config.intern_pool_capacity {
            Some(capacity) => StringPool::bounded(capacity),
            None => StringPool::new(),
        };
        Decoder { pool }
    }

    pub fn decode<T: JsonCodec>(&mut self, json: &str) -> Result<Option<T>, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        self.decode_value(value)
    }

    pub fn decode_value<T: JsonCodec>(&mut self, value: Value) -> Result<Option<T>, DecodeError> {
        T::decode_value(value, &mut self.pool)
    }

    pub fn pool(&self) -> &StringPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut StringPool {
        &mut self.pool
    }
}

#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: CodecConfig,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Encoder { config }
    }

    pub fn to_value<T: JsonCodec>(&self, node: &T) -> Value {
        node.encode_value(&self.config)
    }

    pub fn encode<T: JsonCodec>(&self, node: &T) -> String {
        self.to_value(node).to_string()
    }

    /// Absent nodes encode as `null`.
    pub fn encode_opt<T: JsonCodec>(&self, node: Option<&T>) -> String {
        match node {
            Some(node) => self.encode(node),
            None => Value::Null.to_string(),
        }
    }
}

//! Declared-order object writer.
//!
//! Known fields are written in the order the codec calls the writer; the
//! node's unknown fields are appended afterwards by
//! [`JsonCodec::encode_value`](crate::JsonCodec::encode_value).

use serde_json::{Map, Value};

use crate::codec::JsonCodec;
use crate::config::CodecConfig;
use crate::unrecognized::Unrecognized;

pub struct ObjectWriter<'c> {
    type_name: &'static str,
    object: Map<String, Value>,
    config: &'c CodecConfig,
}

impl<'c> ObjectWriter<'c> {
    pub fn new(type_name: &'static str, config: &'c CodecConfig) -> Self {
        ObjectWriter {
            type_name,
            object: Map::new(),
            config,
        }
    }

    pub fn config(&self) -> &CodecConfig {
        self.config
    }

    /// Writes `value`, or `null` / nothing for an absent field depending on
    /// [`CodecConfig::serialize_nulls`].
    pub fn field(&mut self, name: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.object.insert(name.to_string(), value);
            }
            None if self.config.serialize_nulls => {
                self.object.insert(name.to_string(), Value::Null);
            }
            None => {}
        }
    }

    pub fn string(&mut self, name: &str, value: Option<&str>) {
        self.field(name, value.map(|s| Value::String(s.to_string())));
    }

    pub fn boolean(&mut self, name: &str, value: Option<bool>) {
        self.field(name, value.map(Value::Bool));
    }

    pub fn int(&mut self, name: &str, value: Option<i32>) {
        self.field(name, value.map(Value::from));
    }

    /// Non-finite floats have no JSON form and are written as `null`.
    pub fn float(&mut self, name: &str, value: Option<f64>) {
        self.field(name, value.map(Value::from));
    }

    pub fn coordinate(&mut self, name: &str, value: Option<[f64; 2]>) {
        self.field(
            name,
            value.map(|[lng, lat]| Value::Array(vec![Value::from(lng), Value::from(lat)])),
        );
    }

    pub fn strings<S: AsRef<str>>(&mut self, name: &str, value: Option<&[S]>) {
        self.field(
            name,
            value.map(|items| {
                Value::Array(
                    items
                        .iter()
                        .map(|s| Value::String(s.as_ref().to_string()))
                        .collect(),
                )
            }),
        );
    }

    pub fn booleans(&mut self, name: &str, value: Option<&[bool]>) {
        self.field(
            name,
            value.map(|items| Value::Array(items.iter().copied().map(Value::Bool).collect())),
        );
    }

    pub fn ints(&mut self, name: &str, value: Option<&[i32]>) {
        self.field(
            name,
            value.map(|items| Value::Array(items.iter().copied().map(Value::from).collect())),
        );
    }

    pub fn node<N: JsonCodec>(&mut self, name: &str, value: Option<&N>) {
        let config = self.config;
        self.field(name, value.map(|node| node.encode_value(config)));
    }

    pub fn nodes<N: JsonCodec>(&mut self, name: &str, value: Option<&[N]>) {
        let config = self.config;
        self.field(
            name,
            value.map(|items| Value::Array(items.iter().map(|n| n.encode_value(config)).collect())),
        );
    }

    /// Copies the known `fields` out of a serde-serialized node, in the
    /// order given. Members outside `fields` are left for
    /// [`ObjectWriter::unrecognized`].
    pub fn known_from_serialized(&mut self, fields: &[&str], mut serialized: Map<String, Value>) {
        for name in fields {
            let value = serialized.remove(*name).filter(|v| !v.is_null());
            self.field(name, value);
        }
    }

    /// Appends every unknown entry in store order. An entry whose key
    /// collides with a known field already written is dropped.
    pub fn unrecognized(&mut self, store: &Unrecognized) {
        for (name, value) in store.iter() {
            if self.object.contains_key(name) {
                tracing::warn!(
                    type_name = self.type_name,
                    field = name,
                    "unrecognized entry shadows a known field; dropped on encode"
                );
                continue;
            }
            self.object.insert(name.to_string(), value.clone());
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}

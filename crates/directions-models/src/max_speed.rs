//! Posted speed limit along a segment.

use std::sync::Arc;

use directions_json::error::DecodeError;
use directions_json::{read, JsonCodec, Map, ObjectWriter, StringPool, Unrecognized, Value};

/// Exactly one of `speed`, `unknown` or `none` is normally present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaxSpeed {
    pub unrecognized: Unrecognized,
    pub speed: Option<i32>,
    /// `km/h` or `mph`; interned.
    pub unit: Option<Arc<str>>,
    /// The limit exists but is not known.
    pub unknown: Option<bool>,
    /// No limit applies.
    pub none: Option<bool>,
}

has_unrecognized!(MaxSpeed);

impl MaxSpeed {
    pub const KILOMETRES_PER_HOUR: &'static str = "km/h";
    pub const MILES_PER_HOUR: &'static str = "mph";
}

impl JsonCodec for MaxSpeed {
    const TYPE_NAME: &'static str = "MaxSpeed";
    const FIELDS: &'static [&'static str] = &["speed", "unit", "unknown", "none"];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = MaxSpeed::TYPE_NAME;
        let mut node = MaxSpeed::default();
        for (name, value) in read::members(object) {
            match name.as_str() {
                "speed" => node.speed = Some(read::int(T, &name, value)?),
                "unit" => node.unit = Some(read::interned(T, &name, value, pool)?),
                "unknown" => node.unknown = Some(read::boolean(T, &name, value)?),
                "none" => node.none = Some(read::boolean(T, &name, value)?),
                _ => read::capture(&mut node.unrecognized, T, name, value),
            }
        }
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.int("speed", self.speed);
        w.string("unit", self.unit.as_deref());
        w.boolean("unknown", self.unknown);
        w.boolean("none", self.none);
    }
}

//! Road classification from the Mapbox Streets v8 tileset.

use std::sync::Arc;

use directions_json::error::DecodeError;
use directions_json::{read, JsonCodec, Map, ObjectWriter, StringPool, Unrecognized, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapboxStreetsV8 {
    pub unrecognized: Unrecognized,
    /// JSON member `class`; interned.
    pub road_class: Option<Arc<str>>,
}

has_unrecognized!(MapboxStreetsV8);

impl JsonCodec for MapboxStreetsV8 {
    const TYPE_NAME: &'static str = "MapboxStreetsV8";
    const FIELDS: &'static [&'static str] = &["class"];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = MapboxStreetsV8::TYPE_NAME;
        let mut node = MapboxStreetsV8::default();
        for (name, value) in read::members(object) {
            if name == "class" {
                node.road_class = Some(read::interned(T, &name, value, pool)?);
            } else {
                read::capture(&mut node.unrecognized, T, name, value);
            }
        }
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.string("class", self.road_class.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_maps_to_road_class() {
        let node = MapboxStreetsV8::from_json(r#"{"class":"motorway"}"#).unwrap().unwrap();
        assert_eq!(node.road_class.as_deref(), Some("motorway"));
        assert!(node.unrecognized.is_empty());
        assert_eq!(node.to_json(), r#"{"class":"motorway"}"#);
    }

    #[test]
    fn empty_object_and_null_class() {
        let empty = MapboxStreetsV8::from_json("{}").unwrap().unwrap();
        let null = MapboxStreetsV8::from_json(r#"{"class":null}"#).unwrap().unwrap();
        assert_eq!(empty, null);
        assert_eq!(empty.road_class, None);
    }
}

//! Leaf nodes decoded through the serde-derived default codec, plus the
//! rest stop that nests them.
//!
//! Required members are checked up front by [`decode_default`] so a missing
//! set is reported as a whole. Unknown members are collected by
//! `#[serde(flatten)]` into the same [`Unrecognized`] store the hand-written
//! codecs use.

use directions_json::codec::{decode_default, encode_default};
use directions_json::{
    read, DecodeError, JsonCodec, Map, ObjectWriter, StringPool, Unrecognized, Value,
};
use serde::{Deserialize, Serialize};

macro_rules! default_codec {
    ($ty:ident, [$($field:literal),* $(,)?] $(, required [$($req:literal),* $(,)?])?) => {
        has_unrecognized!($ty);

        impl JsonCodec for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);
            const FIELDS: &'static [&'static str] = &[$($field),*];

            fn decode_object(
                object: Map<String, Value>,
                _pool: &mut StringPool,
            ) -> Result<Self, DecodeError> {
                decode_default(Self::TYPE_NAME, &[$($($req),*)?], object)
            }

            fn encode_object(&self, writer: &mut ObjectWriter<'_>) {
                encode_default(self, Self::FIELDS, writer)
            }
        }
    };
}

/// Route shield artwork reference attached to a banner component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapboxShield {
    pub base_url: String,
    pub name: String,
    pub text_color: String,
    pub display_ref: String,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

default_codec!(
    MapboxShield,
    ["base_url", "name", "text_color", "display_ref"],
    required ["base_url", "name", "text_color", "display_ref"]
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

default_codec!(Amenity, ["type", "name", "brand"], required ["type"]);

/// Hand-written so nested amenities go through their own codec and pick up
/// null handling and encoder config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestStop {
    pub unrecognized: Unrecognized,
    /// `rest_area` or `service_area`.
    pub kind: Option<String>,
    pub name: Option<String>,
    pub amenities: Option<Vec<Amenity>>,
}

has_unrecognized!(RestStop);

impl JsonCodec for RestStop {
    const TYPE_NAME: &'static str = "RestStop";
    const FIELDS: &'static [&'static str] = &["type", "name", "amenities"];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = RestStop::TYPE_NAME;
        let mut node = RestStop::default();
        for (name, value) in read::members(object) {
            match name.as_str() {
                "type" => node.kind = Some(read::string(T, &name, value)?),
                "name" => node.name = Some(read::string(T, &name, value)?),
                "amenities" => node.amenities = Some(read::node_list(T, &name, value, pool)?),
                _ => read::capture(&mut node.unrecognized, T, name, value),
            }
        }
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.string("type", self.kind.as_deref());
        w.string("name", self.name.as_deref());
        w.nodes("amenities", self.amenities.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TollCollection {
    /// `toll_booth` or `toll_gantry`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

default_codec!(TollCollection, ["type", "name"]);

/// Highway interchange (`ic`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interchange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

default_codec!(Interchange, ["name"]);

/// Highway junction (`jct`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

default_codec!(Junction, ["name"]);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergingArea {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub unrecognized: Unrecognized,
}

default_codec!(MergingArea, ["type"]);

impl MergingArea {
    pub const FROM_LEFT: &'static str = "from_left";
    pub const FROM_RIGHT: &'static str = "from_right";
    pub const FROM_BOTH_SIDES: &'static str = "from_both_sides";
}

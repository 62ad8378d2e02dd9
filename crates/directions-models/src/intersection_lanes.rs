//! Lane guidance at an intersection.
//!
//! Decoding runs in two layers. The outer layer takes the vocabulary
//! members (`indications`, `valid_indication`, `payment_methods`) out of the
//! object and interns them; the inner layer decodes what is left, including
//! the nested [`IntersectionLaneAccess`] and any unknown members.

use std::sync::Arc;

use directions_json::error::DecodeError;
use directions_json::{read, JsonCodec, Map, ObjectWriter, StringPool, Unrecognized, Value};

/// Vehicle types a lane is reserved for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionLaneAccess {
    pub unrecognized: Unrecognized,
    /// `hov`, `bus`, `taxi` and so on; interned.
    pub designated: Option<Vec<Arc<str>>>,
}

has_unrecognized!(IntersectionLaneAccess);

impl JsonCodec for IntersectionLaneAccess {
    const TYPE_NAME: &'static str = "IntersectionLaneAccess";
    const FIELDS: &'static [&'static str] = &["designated"];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = IntersectionLaneAccess::TYPE_NAME;
        let mut node = IntersectionLaneAccess::default();
        for (name, value) in read::members(object) {
            if name == "designated" {
                node.designated = Some(read::interned_list(T, &name, value, pool)?);
            } else {
                read::capture(&mut node.unrecognized, T, name, value);
            }
        }
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.strings("designated", self.designated.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionLanes {
    pub unrecognized: Unrecognized,
    /// The lane can be used to complete the maneuver.
    pub valid: Option<bool>,
    /// The lane is the preferred one for the maneuver.
    pub active: Option<bool>,
    /// Which of `indications` applies when the lane is valid; interned.
    pub valid_indication: Option<Arc<str>>,
    /// Arrow markings painted on the lane; interned.
    pub indications: Option<Vec<Arc<str>>>,
    /// Accepted payment methods on toll lanes; interned.
    pub payment_methods: Option<Vec<Arc<str>>>,
    pub access: Option<IntersectionLaneAccess>,
}

has_unrecognized!(IntersectionLanes);

impl IntersectionLanes {
    /// Inner layer: every member except the interned vocabulary ones.
    fn decode_structure(
        object: Map<String, Value>,
        pool: &mut StringPool,
    ) -> Result<Self, DecodeError> {
        const T: &str = IntersectionLanes::TYPE_NAME;
        let mut node = IntersectionLanes::default();
        for (name, value) in read::members(object) {
            match name.as_str() {
                "valid" => node.valid = Some(read::boolean(T, &name, value)?),
                "active" => node.active = Some(read::boolean(T, &name, value)?),
                "access" => {
                    node.access = Some(read::node::<IntersectionLaneAccess>(T, &name, value, pool)?)
                }
                _ => read::capture(&mut node.unrecognized, T, name, value),
            }
        }
        Ok(node)
    }
}

impl JsonCodec for IntersectionLanes {
    const TYPE_NAME: &'static str = "IntersectionLanes";
    const FIELDS: &'static [&'static str] = &[
        "valid",
        "active",
        "valid_indication",
        "indications",
        "payment_methods",
        "access",
    ];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = IntersectionLanes::TYPE_NAME;
        let mut valid_indication = None;
        let mut indications = None;
        let mut payment_methods = None;
        let mut rest = Map::new();
        for (name, value) in read::members(object) {
            match name.as_str() {
                "valid_indication" => valid_indication = Some(value),
                "indications" => indications = Some(value),
                "payment_methods" => payment_methods = Some(value),
                _ => {
                    rest.insert(name, value);
                }
            }
        }

        let mut node = Self::decode_structure(rest, pool)?;
        node.valid_indication = valid_indication
            .map(|v| read::interned(T, "valid_indication", v, pool))
            .transpose()?;
        node.indications = indications
            .map(|v| read::interned_list(T, "indications", v, pool))
            .transpose()?;
        node.payment_methods = payment_methods
            .map(|v| read::interned_list(T, "payment_methods", v, pool))
            .transpose()?;
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.boolean("valid", self.valid);
        w.boolean("active", self.active);
        w.string("valid_indication", self.valid_indication.as_deref());
        w.strings("indications", self.indications.as_deref());
        w.strings("payment_methods", self.payment_methods.as_deref());
        w.node("access", self.access.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directions_json::{Decoder, HasUnrecognized};
    use serde_json::json;

    #[test]
    fn decodes_indications_and_nested_access() {
        let input = r#"{"active":true,"indications":["straight","right"],"access":{"designated":["hov","bus"]}}"#;
        let lanes = IntersectionLanes::from_json(input).unwrap().unwrap();
        assert_eq!(lanes.active, Some(true));
        let indications: Vec<&str> = lanes.indications.iter().flatten().map(|s| &**s).collect();
        assert_eq!(indications, ["straight", "right"]);
        let designated: Vec<&str> = lanes
            .access
            .as_ref()
            .and_then(|a| a.designated.as_ref())
            .into_iter()
            .flatten()
            .map(|s| &**s)
            .collect();
        assert_eq!(designated, ["hov", "bus"]);

        let out: Value = serde_json::from_str(&lanes.to_json()).unwrap();
        let expected: Value = serde_json::from_str(input).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn indications_share_handles_across_lanes() {
        let mut decoder = Decoder::new();
        let a: IntersectionLanes = decoder
            .decode(r#"{"valid":true,"valid_indication":"left","indications":["left"]}"#)
            .unwrap()
            .unwrap();
        let b: IntersectionLanes = decoder
            .decode(r#"{"valid":false,"indications":["left","straight"]}"#)
            .unwrap()
            .unwrap();
        let left_a = a.valid_indication.as_ref().unwrap();
        let left_b = &b.indications.as_ref().unwrap()[0];
        assert!(Arc::ptr_eq(left_a, left_b));
        assert!(Arc::ptr_eq(&a.indications.as_ref().unwrap()[0], left_b));
    }

    #[test]
    fn unknown_members_survive_both_layers() {
        let input = json!({
            "valid": true,
            "indications": ["uturn"],
            "surface": "paved",
            "access": {"designated": ["taxi"], "note": [1, 2]}
        });
        let lanes = IntersectionLanes::from_json(&input.to_string()).unwrap().unwrap();
        assert_eq!(lanes.unrecognized_property("surface"), Some(&json!("paved")));
        assert_eq!(
            lanes.access.as_ref().unwrap().unrecognized.get("note"),
            Some(&json!([1, 2]))
        );
        let out: Value = serde_json::from_str(&lanes.to_json()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn interned_member_type_mismatch() {
        let err = IntersectionLanes::from_json(r#"{"indications":"left"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "IntersectionLanes.indications: expected array of strings, found string"
        );
    }

    #[test]
    fn null_interned_member_is_absent() {
        let lanes = IntersectionLanes::from_json(r#"{"payment_methods":null}"#).unwrap().unwrap();
        assert_eq!(lanes, IntersectionLanes::default());
    }
}

//! The maneuver at the start of a step.
//!
//! Decoding is layered: `type` and `modifier` are taken out of the object
//! and interned, then the remaining members are decoded by
//! [`StepManeuver::decode_structure`].

use std::sync::Arc;

use directions_json::error::{require, DecodeError};
use directions_json::{read, JsonCodec, Map, ObjectWriter, Point, StringPool, Unrecognized, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepManeuver {
    pub unrecognized: Unrecognized,
    /// `[longitude, latitude]`.
    pub raw_location: [f64; 2],
    pub bearing_before: Option<f64>,
    pub bearing_after: Option<f64>,
    pub instruction: Option<String>,
    /// One of the associated constants; interned.
    pub kind: Option<Arc<str>>,
    /// `left`, `slight right`, `uturn` and so on; interned.
    pub modifier: Option<Arc<str>>,
    /// Roundabout exit number.
    pub exit: Option<i32>,
}

has_unrecognized!(StepManeuver);

impl StepManeuver {
    pub const TURN: &'static str = "turn";
    pub const NEW_NAME: &'static str = "new name";
    pub const DEPART: &'static str = "depart";
    pub const ARRIVE: &'static str = "arrive";
    pub const MERGE: &'static str = "merge";
    pub const ON_RAMP: &'static str = "on ramp";
    pub const OFF_RAMP: &'static str = "off ramp";
    pub const FORK: &'static str = "fork";
    pub const END_OF_ROAD: &'static str = "end of road";
    pub const CONTINUE: &'static str = "continue";
    pub const ROUNDABOUT: &'static str = "roundabout";
    pub const ROTARY: &'static str = "rotary";
    pub const ROUNDABOUT_TURN: &'static str = "roundabout turn";
    pub const NOTIFICATION: &'static str = "notification";
    pub const EXIT_ROUNDABOUT: &'static str = "exit roundabout";
    pub const EXIT_ROTARY: &'static str = "exit rotary";

    pub fn new(location: Point) -> Self {
        StepManeuver {
            raw_location: location.coordinates(),
            ..Self::default()
        }
    }

    pub fn location(&self) -> Point {
        Point::from_lng_lat(self.raw_location[0], self.raw_location[1])
    }

    /// Inner layer: every member except the interned ones.
    fn decode_structure(object: Map<String, Value>) -> Result<Self, DecodeError> {
        const T: &str = StepManeuver::TYPE_NAME;
        let mut node = StepManeuver::default();
        let mut location = None;
        for (name, value) in read::members(object) {
            match name.as_str() {
                "location" => location = Some(read::coordinate(T, &name, value)?),
                "bearing_before" => node.bearing_before = Some(read::float(T, &name, value)?),
                "bearing_after" => node.bearing_after = Some(read::float(T, &name, value)?),
                "instruction" => node.instruction = Some(read::string(T, &name, value)?),
                "exit" => node.exit = Some(read::int(T, &name, value)?),
                _ => read::capture(&mut node.unrecognized, T, name, value),
            }
        }
        require(T, &[("location", location.is_some())])?;
        if let Some(location) = location {
            node.raw_location = location;
        }
        Ok(node)
    }
}

impl JsonCodec for StepManeuver {
    const TYPE_NAME: &'static str = "StepManeuver";
    const FIELDS: &'static [&'static str] = &[
        "location",
        "bearing_before",
        "bearing_after",
        "instruction",
        "type",
        "modifier",
        "exit",
    ];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = StepManeuver::TYPE_NAME;
        let mut kind = None;
        let mut modifier = None;
        let mut rest = Map::new();
        for (name, value) in read::members(object) {
            match name.as_str() {
                "type" => kind = Some(read::interned(T, &name, value, pool)?),
                "modifier" => modifier = Some(read::interned(T, &name, value, pool)?),
                _ => {
                    rest.insert(name, value);
                }
            }
        }

        let mut node = Self::decode_structure(rest)?;
        node.kind = kind;
        node.modifier = modifier;
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.coordinate("location", Some(self.raw_location));
        w.float("bearing_before", self.bearing_before);
        w.float("bearing_after", self.bearing_after);
        w.string("instruction", self.instruction.as_deref());
        w.string("type", self.kind.as_deref());
        w.string("modifier", self.modifier.as_deref());
        w.int("exit", self.exit);
    }
}

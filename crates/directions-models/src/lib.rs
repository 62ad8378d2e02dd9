//! directions-models - directions response nodes with forward-compatible
//! JSON codecs.
//!
//! Hot or envelope-like nodes ([`BannerComponents`], [`IntersectionLanes`],
//! [`MaxSpeed`], [`MapboxStreetsV8`], [`StepIntersection`],
//! [`VoiceInstructions`], [`StepManeuver`], [`RestStop`]) carry hand-written
//! codecs that intern small-vocabulary strings and validate required fields.
//! The other leaf nodes in [`nested`] go through their serde derive instead. Every node
//! keeps unrecognized members and writes them back on encode.

pub use directions_json::{
    CodecConfig, DecodeError, Decoder, Encoder, HasUnrecognized, JsonCodec, Point, StringPool,
    Unrecognized,
};

/// Implements [`HasUnrecognized`] for a node with an `unrecognized` field.
macro_rules! has_unrecognized {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl directions_json::HasUnrecognized for $ty {
                fn unrecognized(&self) -> &directions_json::Unrecognized {
                    &self.unrecognized
                }

                fn unrecognized_mut(&mut self) -> &mut directions_json::Unrecognized {
                    &mut self.unrecognized
                }
            }
        )+
    };
}

pub mod banner_components;
pub mod intersection_lanes;
pub mod mapbox_streets_v8;
pub mod max_speed;
pub mod nested;
pub mod step_intersection;
pub mod step_maneuver;
pub mod voice_instructions;

pub use banner_components::BannerComponents;
pub use intersection_lanes::{IntersectionLaneAccess, IntersectionLanes};
pub use mapbox_streets_v8::MapboxStreetsV8;
pub use max_speed::MaxSpeed;
pub use nested::{
    Amenity, Interchange, Junction, MapboxShield, MergingArea, RestStop, TollCollection,
};
pub use step_intersection::StepIntersection;
pub use step_maneuver::StepManeuver;
pub use voice_instructions::VoiceInstructions;

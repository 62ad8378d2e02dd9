//! Spoken announcement attached to a step.

use directions_json::error::DecodeError;
use directions_json::{read, JsonCodec, Map, ObjectWriter, StringPool, Unrecognized, Value};

/// Free-text fields only, so nothing here is interned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceInstructions {
    pub unrecognized: Unrecognized,
    /// Metres before the end of the step at which to speak.
    pub distance_along_geometry: Option<f64>,
    pub announcement: Option<String>,
    pub ssml_announcement: Option<String>,
}

has_unrecognized!(VoiceInstructions);

impl JsonCodec for VoiceInstructions {
    const TYPE_NAME: &'static str = "VoiceInstructions";
    const FIELDS: &'static [&'static str] =
        &["distanceAlongGeometry", "announcement", "ssmlAnnouncement"];

    fn decode_object(object: Map<String, Value>, _pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = VoiceInstructions::TYPE_NAME;
        let mut node = VoiceInstructions::default();
        for (name, value) in read::members(object) {
            match name.as_str() {
                "distanceAlongGeometry" => {
                    node.distance_along_geometry = Some(read::float(T, &name, value)?)
                }
                "announcement" => node.announcement = Some(read::string(T, &name, value)?),
                "ssmlAnnouncement" => node.ssml_announcement = Some(read::string(T, &name, value)?),
                _ => read::capture(&mut node.unrecognized, T, name, value),
            }
        }
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.float("distanceAlongGeometry", self.distance_along_geometry);
        w.string("announcement", self.announcement.as_deref());
        w.string("ssmlAnnouncement", self.ssml_announcement.as_deref());
    }
}

//! One visual piece of a banner instruction: a road name, an icon, a lane,
//! a delimiter.

use std::cmp::Ordering;

use directions_json::error::{require, DecodeError};
use directions_json::{read, JsonCodec, Map, ObjectWriter, StringPool, Unrecognized, Value};

use crate::nested::MapboxShield;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerComponents {
    pub unrecognized: Unrecognized,
    /// Display text. Required.
    pub text: String,
    /// Component type, see the associated constants. Required.
    pub kind: String,
    pub sub_kind: Option<String>,
    pub abbreviation: Option<String>,
    /// Lower values are abbreviated first.
    pub abbreviation_priority: Option<i32>,
    pub image_base_url: Option<String>,
    pub mapbox_shield: Option<MapboxShield>,
    pub image_url: Option<String>,
    /// Lane directions this component applies to.
    pub directions: Option<Vec<String>>,
    pub active: Option<bool>,
    pub active_direction: Option<String>,
}

has_unrecognized!(BannerComponents);

impl BannerComponents {
    pub const TEXT: &'static str = "text";
    pub const ICON: &'static str = "icon";
    pub const DELIMITER: &'static str = "delimiter";
    pub const EXIT_NUMBER: &'static str = "exit-number";
    pub const EXIT: &'static str = "exit";
    pub const LANE: &'static str = "lane";
    pub const GUIDANCE_VIEW: &'static str = "guidance-view";

    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        BannerComponents {
            text: text.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Orders by abbreviation priority, lowest first. A component without a
    /// priority sorts after any component that has one.
    pub fn cmp_abbreviation_priority(&self, other: &Self) -> Ordering {
        match (self.abbreviation_priority, other.abbreviation_priority) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl JsonCodec for BannerComponents {
    const TYPE_NAME: &'static str = "BannerComponents";
    const FIELDS: &'static [&'static str] = &[
        "text",
        "type",
        "subType",
        "abbr",
        "abbr_priority",
        "imageBaseURL",
        "mapbox_shield",
        "imageURL",
        "directions",
        "active",
        "active_direction",
    ];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = BannerComponents::TYPE_NAME;
        let mut unrecognized = Unrecognized::new();
        let mut text = None;
        let mut kind = None;
        let mut sub_kind = None;
        let mut abbreviation = None;
        let mut abbreviation_priority = None;
        let mut image_base_url = None;
        let mut mapbox_shield = None;
        let mut image_url = None;
        let mut directions = None;
        let mut active = None;
        let mut active_direction = None;

        for (name, value) in read::members(object) {
            match name.as_str() {
                "text" => text = Some(read::string(T, &name, value)?),
                "type" => kind = Some(read::string(T, &name, value)?),
                "subType" => sub_kind = Some(read::string(T, &name, value)?),
                "abbr" => abbreviation = Some(read::string(T, &name, value)?),
                "abbr_priority" => abbreviation_priority = Some(read::int(T, &name, value)?),
                "imageBaseURL" => image_base_url = Some(read::string(T, &name, value)?),
                "mapbox_shield" => mapbox_shield = Some(read::node::<MapboxShield>(T, &name, value, pool)?),
                "imageURL" => image_url = Some(read::string(T, &name, value)?),
                "directions" => directions = Some(read::string_list(T, &name, value)?),
                "active" => active = Some(read::boolean(T, &name, value)?),
                "active_direction" => active_direction = Some(read::string(T, &name, value)?),
                _ => read::capture(&mut unrecognized, T, name, value),
            }
        }

        require(T, &[("text", text.is_some()), ("type", kind.is_some())])?;

        Ok(BannerComponents {
            unrecognized,
            text: text.unwrap_or_default(),
            kind: kind.unwrap_or_default(),
            sub_kind,
            abbreviation,
            abbreviation_priority,
            image_base_url,
            mapbox_shield,
            image_url,
            directions,
            active,
            active_direction,
        })
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.string("text", Some(self.text.as_str()));
        w.string("type", Some(self.kind.as_str()));
        w.string("subType", self.sub_kind.as_deref());
        w.string("abbr", self.abbreviation.as_deref());
        w.int("abbr_priority", self.abbreviation_priority);
        w.string("imageBaseURL", self.image_base_url.as_deref());
        w.node("mapbox_shield", self.mapbox_shield.as_ref());
        w.string("imageURL", self.image_url.as_deref());
        w.strings("directions", self.directions.as_deref());
        w.boolean("active", self.active);
        w.string("active_direction", self.active_direction.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_is_named() {
        let err = BannerComponents::from_json(r#"{"type":"text"}"#).unwrap_err();
        assert_eq!(err.missing_fields(), &["text"]);
    }

    #[test]
    fn missing_both_required_fields_are_named_together() {
        let err = BannerComponents::from_json("{}").unwrap_err();
        assert_eq!(err.missing_fields(), &["text", "type"]);
        assert_eq!(
            err.to_string(),
            "BannerComponents: missing required properties: text type"
        );
    }

    #[test]
    fn null_active_direction_equals_absent() {
        let with_null =
            BannerComponents::from_json(r#"{"text":"Main St","type":"text","active_direction":null}"#)
                .unwrap()
                .unwrap();
        let without =
            BannerComponents::from_json(r#"{"text":"Main St","type":"text"}"#).unwrap().unwrap();
        assert_eq!(with_null.active_direction, None);
        assert_eq!(with_null, without);
    }

    #[test]
    fn priority_ordering() {
        let p2 = BannerComponents {
            abbreviation_priority: Some(2),
            ..BannerComponents::new("test", BannerComponents::TEXT)
        };
        let p3 = BannerComponents {
            abbreviation_priority: Some(3),
            ..BannerComponents::new("test", BannerComponents::TEXT)
        };
        let none = BannerComponents::new("test", BannerComponents::TEXT);

        assert_eq!(p2.cmp_abbreviation_priority(&p3), Ordering::Less);
        assert_eq!(p3.cmp_abbreviation_priority(&p2), Ordering::Greater);
        assert_eq!(p3.cmp_abbreviation_priority(&p3.clone()), Ordering::Equal);
        assert_eq!(none.cmp_abbreviation_priority(&p3), Ordering::Greater);
        assert_eq!(p3.cmp_abbreviation_priority(&none), Ordering::Less);
        assert_eq!(none.cmp_abbreviation_priority(&none.clone()), Ordering::Equal);
    }

    #[test]
    fn nested_shield_error_propagates() {
        let err = BannerComponents::from_json(
            r#"{"text":"I 95","type":"icon","mapbox_shield":{"name":"us-interstate"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingRequired {
                type_name: "MapboxShield",
                ..
            }
        ));
        assert_eq!(err.missing_fields(), &["base_url", "text_color", "display_ref"]);

        let err = BannerComponents::from_json(r#"{"text":"I 95","type":"icon","mapbox_shield":{}}"#)
            .unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &["base_url", "name", "text_color", "display_ref"]
        );
    }
}

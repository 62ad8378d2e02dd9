//! Property checks: decode(encode(n)) == n, and unknown members survive a
//! decode/encode pass with their values intact.

use std::sync::Arc;

use directions_models::{
    Amenity, BannerComponents, HasUnrecognized, IntersectionLaneAccess, IntersectionLanes,
    JsonCodec, MapboxStreetsV8, MaxSpeed, RestStop, StepIntersection, StepManeuver, Unrecognized,
    VoiceInstructions,
};
use proptest::collection::vec;
use proptest::prelude::*;
use serde_json::{json, Value};

/// Quarter steps are exact in binary and print without rounding.
fn float() -> impl Strategy<Value = f64> {
    (-4000i32..4000).prop_map(|i| f64::from(i) / 4.0)
}

fn vocab() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just("left"),
        Just("right"),
        Just("straight"),
        Just("slight left"),
        Just("uturn"),
        Just(""),
    ]
    .prop_map(|s: &str| Arc::<str>::from(s))
}

fn unknown_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
        vec(any::<i16>(), 0..4).prop_map(|xs| json!(xs)),
        ("[a-z]{1,4}", any::<bool>()).prop_map(|(k, v)| json!({ k: v })),
    ]
}

/// Unknown members whose names can never collide with a known field.
fn unknowns() -> impl Strategy<Value = Unrecognized> {
    vec(("x_[a-z]{1,6}", unknown_value()), 0..4).prop_map(|entries| entries.into_iter().collect())
}

fn max_speed() -> impl Strategy<Value = MaxSpeed> {
    (
        unknowns(),
        proptest::option::of(0i32..200),
        proptest::option::of(prop_oneof![Just("km/h"), Just("mph")].prop_map(|s: &str| Arc::<str>::from(s))),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(unrecognized, speed, unit, unknown, none)| MaxSpeed {
            unrecognized,
            speed,
            unit,
            unknown,
            none,
        })
}

fn voice() -> impl Strategy<Value = VoiceInstructions> {
    (
        unknowns(),
        proptest::option::of(float()),
        proptest::option::of(".{0,12}"),
        proptest::option::of(".{0,12}"),
    )
        .prop_map(|(unrecognized, distance, announcement, ssml)| VoiceInstructions {
            unrecognized,
            distance_along_geometry: distance,
            announcement,
            ssml_announcement: ssml,
        })
}

fn lanes() -> impl Strategy<Value = IntersectionLanes> {
    (
        unknowns(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(vocab()),
        proptest::option::of(vec(vocab(), 0..3)),
        proptest::option::of(proptest::option::of(vec(vocab(), 0..3))),
    )
        .prop_map(|(unrecognized, valid, active, valid_indication, indications, access)| {
            IntersectionLanes {
                unrecognized,
                valid,
                active,
                valid_indication,
                indications,
                payment_methods: None,
                access: access.map(|designated| IntersectionLaneAccess {
                    designated,
                    ..IntersectionLaneAccess::default()
                }),
            }
        })
}

fn banner() -> impl Strategy<Value = BannerComponents> {
    (
        unknowns(),
        "[A-Za-z0-9 ]{0,10}",
        prop_oneof![
            Just(BannerComponents::TEXT),
            Just(BannerComponents::ICON),
            Just(BannerComponents::EXIT_NUMBER),
        ],
        proptest::option::of(-3i32..10),
        proptest::option::of(vec(vocab().prop_map(|s| s.to_string()), 0..3)),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(unrecognized, text, kind, priority, directions, active)| BannerComponents {
            unrecognized,
            abbreviation_priority: priority,
            directions,
            active,
            ..BannerComponents::new(text, kind)
        })
}

fn maneuver() -> impl Strategy<Value = StepManeuver> {
    (
        unknowns(),
        (float(), float()),
        proptest::option::of(float()),
        proptest::option::of(prop_oneof![Just(StepManeuver::TURN), Just(StepManeuver::FORK)]),
        proptest::option::of(vocab()),
        proptest::option::of(1i32..6),
    )
        .prop_map(|(unrecognized, (lng, lat), bearing, kind, modifier, exit)| StepManeuver {
            unrecognized,
            raw_location: [lng, lat],
            bearing_after: bearing,
            kind: kind.map(|s: &str| Arc::<str>::from(s)),
            modifier,
            exit,
            ..StepManeuver::default()
        })
}

fn streets_v8() -> impl Strategy<Value = MapboxStreetsV8> {
    (
        unknowns(),
        proptest::option::of(
            prop_oneof![Just("motorway"), Just("primary"), Just("service")]
                .prop_map(|s: &str| Arc::<str>::from(s)),
        ),
    )
        .prop_map(|(unrecognized, road_class)| MapboxStreetsV8 {
            unrecognized,
            road_class,
        })
}

fn amenity() -> impl Strategy<Value = Amenity> {
    (
        unknowns(),
        "[a-z_]{0,10}",
        proptest::option::of("[A-Za-z ]{0,10}"),
        proptest::option::of("[A-Za-z ]{0,10}"),
    )
        .prop_map(|(unrecognized, kind, name, brand)| Amenity {
            kind,
            name,
            brand,
            unrecognized,
        })
}

fn rest_stop() -> impl Strategy<Value = RestStop> {
    (
        unknowns(),
        proptest::option::of(prop_oneof![Just("rest_area"), Just("service_area")]),
        proptest::option::of("[A-Za-z ]{0,10}"),
        proptest::option::of(vec(amenity(), 0..3)),
    )
        .prop_map(|(unrecognized, kind, name, amenities)| RestStop {
            unrecognized,
            kind: kind.map(str::to_string),
            name,
            amenities,
        })
}

fn intersection() -> impl Strategy<Value = StepIntersection> {
    let shape = (
        unknowns(),
        (float(), float()),
        proptest::option::of(vec(0i32..360, 0..4)),
        proptest::option::of(vec(any::<bool>(), 0..4)),
        proptest::option::of(vec("[a-z]{1,8}", 0..3)),
        proptest::option::of(0i32..4),
        proptest::option::of(0i32..4),
        proptest::option::of(float()),
    );
    let nested = (
        proptest::option::of(vec(lanes(), 0..3)),
        proptest::option::of(rest_stop()),
        proptest::option::of(streets_v8()),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[A-Za-z ]{0,10}"),
    );
    (shape, nested).prop_map(
        |(
            (unrecognized, (lng, lat), bearings, entry, classes, in_index, out_index, duration),
            (lanes, rest_stop, mapbox_streets_v8, traffic_signal, tunnel_name),
        )| StepIntersection {
            unrecognized,
            raw_location: [lng, lat],
            bearings,
            entry,
            classes,
            in_index,
            out_index,
            duration,
            lanes,
            rest_stop,
            mapbox_streets_v8,
            traffic_signal,
            tunnel_name,
            ..StepIntersection::default()
        },
    )
}

fn round_trip<T: JsonCodec + PartialEq + std::fmt::Debug>(node: &T) -> T {
    T::from_json(&node.to_json())
        .expect("encoded node must decode")
        .expect("encoded node is never null")
}

proptest! {
    #[test]
    fn max_speed_round_trips(node in max_speed()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn voice_instructions_round_trip(node in voice()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn intersection_lanes_round_trip(node in lanes()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn banner_components_round_trip(node in banner()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn step_maneuver_round_trips(node in maneuver()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn mapbox_streets_v8_round_trips(node in streets_v8()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn rest_stop_with_amenities_round_trips(node in rest_stop()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn step_intersection_round_trips(node in intersection()) {
        prop_assert_eq!(round_trip(&node), node);
    }

    #[test]
    fn step_intersection_unknowns_survive_after_known_ones(extra in unknowns()) {
        let mut object = serde_json::Map::new();
        for (name, value) in extra.iter() {
            object.insert(name.to_string(), value.clone());
        }
        object.insert("location".into(), json!([1.5, -2.25]));
        object.insert("rest_stop".into(), json!({"type": "rest_area", "x_open": true}));
        let input = Value::Object(object);

        let node = StepIntersection::from_json(&input.to_string()).unwrap().unwrap();
        prop_assert_eq!(node.unrecognized_property_names().len(), extra.len());
        prop_assert_eq!(
            node.rest_stop.as_ref().unwrap().unrecognized_property("x_open"),
            Some(&json!(true))
        );

        let out: Value = serde_json::from_str(&node.to_json()).unwrap();
        prop_assert_eq!(&out, &input);
        let names: Vec<&String> = out.as_object().unwrap().keys().collect();
        prop_assert_eq!(names[0].as_str(), "location");
        prop_assert_eq!(names[1].as_str(), "rest_stop");
    }

    #[test]
    fn unknown_members_reappear_after_known_ones(extra in unknowns()) {
        let mut object = serde_json::Map::new();
        for (name, value) in extra.iter() {
            object.insert(name.to_string(), value.clone());
        }
        object.insert("speed".into(), json!(30));
        let input = Value::Object(object);

        let node = MaxSpeed::from_json(&input.to_string()).unwrap().unwrap();
        prop_assert_eq!(node.unrecognized_property_names().len(), extra.len());

        let out: Value = serde_json::from_str(&node.to_json()).unwrap();
        prop_assert_eq!(&out, &input);
        let names: Vec<&String> = out.as_object().unwrap().keys().collect();
        prop_assert_eq!(names[0].as_str(), "speed");
    }
}

//! Intersection along a route step, the largest hand-written codec.
//!
//! `location` is the only required member. Every other member is optional
//! and an explicit `null` is the same as leaving it out.

use directions_json::error::{require, DecodeError};
use directions_json::{
    read, JsonCodec, Map, ObjectWriter, Point, StringPool, Unrecognized, Value,
};

use crate::intersection_lanes::IntersectionLanes;
use crate::mapbox_streets_v8::MapboxStreetsV8;
use crate::nested::{Interchange, Junction, MergingArea, RestStop, TollCollection};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepIntersection {
    pub unrecognized: Unrecognized,
    /// `[longitude, latitude]`.
    pub raw_location: [f64; 2],
    /// Bearings of every road at the intersection, clockwise from north.
    pub bearings: Option<Vec<i32>>,
    pub classes: Option<Vec<String>>,
    /// Parallel to `bearings`: whether the road may be entered.
    pub entry: Option<Vec<bool>>,
    pub form_of_way: Option<Vec<String>>,
    pub geometries: Option<Vec<String>>,
    pub access: Option<Vec<i32>>,
    pub elevated: Option<Vec<bool>>,
    pub bridges: Option<Vec<bool>>,
    /// Index into `bearings` of the incoming road.
    pub in_index: Option<i32>,
    /// Index into `bearings` of the outgoing road.
    pub out_index: Option<i32>,
    pub lanes: Option<Vec<IntersectionLanes>>,
    pub geometry_index: Option<i32>,
    pub is_urban: Option<bool>,
    pub admin_index: Option<i32>,
    pub rest_stop: Option<RestStop>,
    pub toll_collection: Option<TollCollection>,
    pub mapbox_streets_v8: Option<MapboxStreetsV8>,
    pub tunnel_name: Option<String>,
    pub railway_crossing: Option<bool>,
    pub traffic_signal: Option<bool>,
    pub stop_sign: Option<bool>,
    pub yield_sign: Option<bool>,
    /// JSON member `ic`.
    pub interchange: Option<Interchange>,
    /// JSON member `jct`.
    pub junction: Option<Junction>,
    pub merging_area: Option<MergingArea>,
    /// Seconds to traverse the intersection.
    pub duration: Option<f64>,
}

has_unrecognized!(StepIntersection);

impl StepIntersection {
    pub fn new(location: Point) -> Self {
        StepIntersection {
            raw_location: location.coordinates(),
            ..Self::default()
        }
    }

    pub fn location(&self) -> Point {
        Point::from_lng_lat(self.raw_location[0], self.raw_location[1])
    }
}

impl JsonCodec for StepIntersection {
    const TYPE_NAME: &'static str = "StepIntersection";
    const FIELDS: &'static [&'static str] = &[
        "location",
        "bearings",
        "classes",
        "entry",
        "form_of_way",
        "geometries",
        "access",
        "elevated",
        "bridges",
        "in",
        "out",
        "lanes",
        "geometry_index",
        "is_urban",
        "admin_index",
        "rest_stop",
        "toll_collection",
        "mapbox_streets_v8",
        "tunnel_name",
        "railway_crossing",
        "traffic_signal",
        "stop_sign",
        "yield_sign",
        "ic",
        "jct",
        "merging_area",
        "duration",
    ];

    fn decode_object(object: Map<String, Value>, pool: &mut StringPool) -> Result<Self, DecodeError> {
        const T: &str = StepIntersection::TYPE_NAME;
        let mut node = StepIntersection::default();
        let mut location = None;

        for (name, value) in read::members(object) {
            let field = name.as_str();
            match field {
                "location" => location = Some(read::coordinate(T, field, value)?),
                "bearings" => node.bearings = Some(read::int_list(T, field, value)?),
                "classes" => node.classes = Some(read::string_list(T, field, value)?),
                "entry" => node.entry = Some(read::bool_list(T, field, value)?),
                "form_of_way" => node.form_of_way = Some(read::string_list(T, field, value)?),
                "geometries" => node.geometries = Some(read::string_list(T, field, value)?),
                "access" => node.access = Some(read::int_list(T, field, value)?),
                "elevated" => node.elevated = Some(read::bool_list(T, field, value)?),
                "bridges" => node.bridges = Some(read::bool_list(T, field, value)?),
                "in" => node.in_index = Some(read::int(T, field, value)?),
                "out" => node.out_index = Some(read::int(T, field, value)?),
                "lanes" => node.lanes = Some(read::node_list(T, field, value, pool)?),
                "geometry_index" => node.geometry_index = Some(read::int(T, field, value)?),
                "is_urban" => node.is_urban = Some(read::boolean(T, field, value)?),
                "admin_index" => node.admin_index = Some(read::int(T, field, value)?),
                "rest_stop" => node.rest_stop = Some(read::node(T, field, value, pool)?),
                "toll_collection" => node.toll_collection = Some(read::node(T, field, value, pool)?),
                "mapbox_streets_v8" => {
                    node.mapbox_streets_v8 = Some(read::node(T, field, value, pool)?)
                }
                "tunnel_name" => node.tunnel_name = Some(read::string(T, field, value)?),
                "railway_crossing" => node.railway_crossing = Some(read::boolean(T, field, value)?),
                "traffic_signal" => node.traffic_signal = Some(read::boolean(T, field, value)?),
                "stop_sign" => node.stop_sign = Some(read::boolean(T, field, value)?),
                "yield_sign" => node.yield_sign = Some(read::boolean(T, field, value)?),
                "ic" => node.interchange = Some(read::node(T, field, value, pool)?),
                "jct" => node.junction = Some(read::node(T, field, value, pool)?),
                "merging_area" => node.merging_area = Some(read::node(T, field, value, pool)?),
                "duration" => node.duration = Some(read::float(T, field, value)?),
                _ => read::capture(&mut node.unrecognized, T, name, value),
            }
        }

        require(T, &[("location", location.is_some())])?;
        if let Some(location) = location {
            node.raw_location = location;
        }
        Ok(node)
    }

    fn encode_object(&self, w: &mut ObjectWriter<'_>) {
        w.coordinate("location", Some(self.raw_location));
        w.ints("bearings", self.bearings.as_deref());
        w.strings("classes", self.classes.as_deref());
        w.booleans("entry", self.entry.as_deref());
        w.strings("form_of_way", self.form_of_way.as_deref());
        w.strings("geometries", self.geometries.as_deref());
        w.ints("access", self.access.as_deref());
        w.booleans("elevated", self.elevated.as_deref());
        w.booleans("bridges", self.bridges.as_deref());
        w.int("in", self.in_index);
        w.int("out", self.out_index);
        w.nodes("lanes", self.lanes.as_deref());
        w.int("geometry_index", self.geometry_index);
        w.boolean("is_urban", self.is_urban);
        w.int("admin_index", self.admin_index);
        w.node("rest_stop", self.rest_stop.as_ref());
        w.node("toll_collection", self.toll_collection.as_ref());
        w.node("mapbox_streets_v8", self.mapbox_streets_v8.as_ref());
        w.string("tunnel_name", self.tunnel_name.as_deref());
        w.boolean("railway_crossing", self.railway_crossing);
        w.boolean("traffic_signal", self.traffic_signal);
        w.boolean("stop_sign", self.stop_sign);
        w.boolean("yield_sign", self.yield_sign);
        w.node("ic", self.interchange.as_ref());
        w.node("jct", self.junction.as_ref());
        w.node("merging_area", self.merging_area.as_ref());
        w.float("duration", self.duration);
    }
}

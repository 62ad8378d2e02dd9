//! The `exclude` request parameter: road criteria to avoid plus points to
//! route around, e.g. `point(13.4 52.5),toll,ferry`.

use directions_json::Point;

use crate::parse::parse_strings;
use crate::COMMA;

pub const FERRY: &str = "ferry";
pub const MOTORWAY: &str = "motorway";
pub const TOLL: &str = "toll";
pub const TUNNEL: &str = "tunnel";
pub const RESTRICTED: &str = "restricted";
pub const CASH_ONLY_TOLLS: &str = "cash_only_tolls";
pub const UNPAVED: &str = "unpaved";

/// Criteria accepted when parsing; anything else is dropped.
pub const VALID_CRITERIA: &[&str] = &[
    FERRY,
    MOTORWAY,
    TOLL,
    TUNNEL,
    RESTRICTED,
    CASH_ONLY_TOLLS,
    UNPAVED,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exclude {
    pub criteria: Option<Vec<String>>,
    pub points: Option<Vec<Point>>,
}

impl Exclude {
    /// Returns `None` for an empty parameter or one with no usable items.
    pub fn from_query_parameter(parameter: &str) -> Option<Exclude> {
        if parameter.is_empty() {
            return None;
        }
        let mut criteria = Vec::new();
        let mut points = Vec::new();
        for item in parse_strings(parameter, COMMA).into_iter().flatten() {
            if item.starts_with("point(") && item.ends_with(')') {
                match parse_point(&item) {
                    Some(point) => points.push(point),
                    None => tracing::debug!(item = %item, "dropping unparsable exclude point"),
                }
            } else if VALID_CRITERIA.contains(&item.as_str()) {
                criteria.push(item);
            } else {
                tracing::debug!(item = %item, "dropping unknown exclude criterion");
            }
        }
        if criteria.is_empty() && points.is_empty() {
            return None;
        }
        Some(Exclude {
            criteria: (!criteria.is_empty()).then_some(criteria),
            points: (!points.is_empty()).then_some(points),
        })
    }

    /// Points first, then criteria, all comma separated.
    pub fn to_query_parameter(&self) -> Option<String> {
        if self.criteria.is_none() && self.points.is_none() {
            return None;
        }
        let points = self.points.iter().flatten().map(|p| {
            format!("point({:?} {:?})", p.longitude, p.latitude)
        });
        let criteria = self.criteria.iter().flatten().cloned();
        Some(points.chain(criteria).collect::<Vec<_>>().join(COMMA))
    }
}

/// `point(<lng> <lat>)`.
fn parse_point(item: &str) -> Option<Point> {
    let inner = item.strip_prefix("point(")?.strip_suffix(')')?;
    let (lng, lat) = inner.split_once(' ')?;
    Some(Point::from_lng_lat(lng.parse().ok()?, lat.parse().ok()?))
}

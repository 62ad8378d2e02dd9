//! List-to-string formatters for query parameters.
//!
//! Every formatter returns `None` for an empty list so the caller can leave
//! the parameter out. `None` entries become empty segments.

use directions_json::Point;

use crate::bearing::Bearing;
use crate::{COMMA, SEMICOLON, UNLIMITED};

/// Joins `tokens` with `delimiter`, rendering absent tokens as nothing.
///
/// Examples:
/// - `[Some("a"), None, Some("b")]` with `;` -> `"a;;b"`
/// - `[]` -> `None`
pub fn join<S: AsRef<str>>(delimiter: &str, tokens: &[Option<S>]) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        if let Some(token) = token {
            out.push_str(token.as_ref());
        }
    }
    Some(out)
}

/// Plain decimal with at most seven fractional digits and no trailing
/// zeros: `1.0` -> `"1"`, `0.123456789` -> `"0.1234568"`.
pub fn format_double(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{value:.7}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `f64::INFINITY` is written as `unlimited`.
pub fn format_radiuses(radiuses: &[Option<f64>]) -> Option<String> {
    let tokens: Vec<Option<String>> = radiuses
        .iter()
        .map(|radius| {
            radius.map(|r| {
                if r == f64::INFINITY {
                    UNLIMITED.to_string()
                } else {
                    format_double(r)
                }
            })
        })
        .collect();
    join(SEMICOLON, &tokens)
}

/// `angle,degrees` per entry.
pub fn format_bearings(bearings: &[Option<Bearing>]) -> Option<String> {
    let tokens: Vec<Option<String>> = bearings
        .iter()
        .map(|b| b.map(|b| pair(b.angle, b.degrees)))
        .collect();
    join(SEMICOLON, &tokens)
}

/// `pickup,dropoff` waypoint index pairs.
pub fn format_distributions(distributions: &[Option<[i32; 2]>]) -> Option<String> {
    let tokens: Vec<Option<String>> = distributions
        .iter()
        .map(|d| d.map(|[pickup, dropoff]| pair(f64::from(pickup), f64::from(dropoff))))
        .collect();
    join(SEMICOLON, &tokens)
}

/// `longitude,latitude` per entry.
pub fn format_points(points: &[Option<Point>]) -> Option<String> {
    let tokens: Vec<Option<String>> = points
        .iter()
        .map(|p| p.map(|p| pair(p.longitude, p.latitude)))
        .collect();
    join(SEMICOLON, &tokens)
}

/// Approaches, waypoint names, snapping flags and other string lists.
pub fn format_strings<S: AsRef<str>>(values: &[Option<S>]) -> Option<String> {
    join(SEMICOLON, values)
}

pub fn format_booleans(values: &[Option<bool>]) -> Option<String> {
    let tokens: Vec<Option<&str>> = values
        .iter()
        .map(|v| v.map(|v| if v { "true" } else { "false" }))
        .collect();
    join(SEMICOLON, &tokens)
}

fn pair(first: f64, second: f64) -> String {
    format!("{}{}{}", format_double(first), COMMA, format_double(second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_renders_absent_as_empty_segment() {
        assert_eq!(join(";", &[Some("a"), None, Some("b")]).as_deref(), Some("a;;b"));
        assert_eq!(join::<&str>(";", &[None]).as_deref(), Some(""));
        assert_eq!(join::<&str>(";", &[]), None);
    }

    #[test]
    fn format_double_trims_and_rounds() {
        assert_eq!(format_double(1.0), "1");
        assert_eq!(format_double(-122.4194), "-122.4194");
        assert_eq!(format_double(0.123456789), "0.1234568");
        assert_eq!(format_double(45.5), "45.5");
        assert_eq!(format_double(100.0), "100");
        assert_eq!(format_double(0.0), "0");
    }

    #[test]
    fn radiuses_write_unlimited() {
        assert_eq!(
            format_radiuses(&[Some(f64::INFINITY), None, Some(50.5)]).as_deref(),
            Some("unlimited;;50.5")
        );
        assert_eq!(format_radiuses(&[]), None);
    }

    #[test]
    fn bearings_and_distributions() {
        assert_eq!(
            format_bearings(&[Some(Bearing::new(90.0, 45.0)), None]).as_deref(),
            Some("90,45;")
        );
        assert_eq!(
            format_distributions(&[Some([1, 2]), None, Some([3, 4])]).as_deref(),
            Some("1,2;;3,4")
        );
    }

    #[test]
    fn points_and_booleans() {
        let points = [
            Some(Point::from_lng_lat(13.4, 52.5)),
            Some(Point::from_lng_lat(-0.1278, 51.5074)),
        ];
        assert_eq!(format_points(&points).as_deref(), Some("13.4,52.5;-0.1278,51.5074"));
        assert_eq!(
            format_booleans(&[Some(true), None, Some(false)]).as_deref(),
            Some("true;;false")
        );
        assert_eq!(
            format_strings(&[Some("curb"), None, Some("unrestricted")]).as_deref(),
            Some("curb;;unrestricted")
        );
    }
}

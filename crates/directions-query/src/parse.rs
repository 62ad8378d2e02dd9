//! String-to-list parsers, the inverse of [`crate::format`].
//!
//! An empty segment parses to `None` so positions line up with waypoints.

use directions_json::Point;

use crate::bearing::Bearing;
use crate::error::QueryError;
use crate::{COMMA, SEMICOLON, UNLIMITED};

/// `;`-separated integers. Trailing empty segments are dropped, leading and
/// inner ones are kept as `None`. Surrounding whitespace is not accepted.
///
/// Examples:
/// - `"1;;3"` -> `[Some(1), None, Some(3)]`
/// - `"1;2;;"` -> `[Some(1), Some(2)]`
pub fn parse_integers(text: &str) -> Result<Vec<Option<i32>>, QueryError> {
    let mut segments: Vec<&str> = text.split(SEMICOLON).collect();
    if !text.is_empty() {
        while segments.last() == Some(&"") {
            segments.pop();
        }
    }
    segments
        .into_iter()
        .map(|segment| {
            if segment.is_empty() {
                Ok(None)
            } else {
                segment
                    .parse::<i32>()
                    .map(Some)
                    .map_err(|_| QueryError::InvalidNumber(segment.to_string()))
            }
        })
        .collect()
}

/// Splits on `separator`, keeping every segment.
pub fn parse_strings(text: &str, separator: &str) -> Vec<Option<String>> {
    text.split(separator)
        .map(|segment| (!segment.is_empty()).then(|| segment.to_string()))
        .collect()
}

/// `lng,lat;lng,lat`.
pub fn parse_points(text: &str) -> Result<Vec<Option<Point>>, QueryError> {
    text.split(SEMICOLON)
        .map(|target| {
            if target.is_empty() {
                return Ok(None);
            }
            let mut parts = target.split(COMMA);
            let (Some(lng), Some(lat)) = (parts.next(), parts.next()) else {
                return Err(QueryError::InvalidNumber(target.to_string()));
            };
            Ok(Some(Point::from_lng_lat(double(lng)?, double(lat)?)))
        })
        .collect()
}

/// `;`-separated doubles; `unlimited` reads as `f64::INFINITY`.
pub fn parse_doubles(text: &str) -> Result<Vec<Option<f64>>, QueryError> {
    text.split(SEMICOLON)
        .map(|segment| match segment {
            "" => Ok(None),
            UNLIMITED => Ok(Some(f64::INFINITY)),
            other => double(other).map(Some),
        })
        .collect()
}

/// `a,b;c,d` pairs. A non-empty entry that does not hold exactly two
/// values is skipped rather than kept as `None`.
pub fn parse_list_of_doubles(text: &str) -> Result<Vec<Option<[f64; 2]>>, QueryError> {
    let mut result = Vec::new();
    for entry in text.split(SEMICOLON) {
        if entry.is_empty() {
            result.push(None);
            continue;
        }
        let mut values: Vec<&str> = entry.split(COMMA).collect();
        while values.last() == Some(&"") {
            values.pop();
        }
        match values.as_slice() {
            [first, second] => result.push(Some([double(first)?, double(second)?])),
            _ => tracing::debug!(entry, "skipping entry that is not a pair"),
        }
    }
    Ok(result)
}

/// `angle,degrees;angle,degrees`.
pub fn parse_bearings(text: &str) -> Result<Vec<Option<Bearing>>, QueryError> {
    Ok(parse_list_of_doubles(text)?
        .into_iter()
        .map(|pair| pair.map(|[angle, degrees]| Bearing::new(angle, degrees)))
        .collect())
}

/// Case-insensitive `true`/`false`. Any other non-empty token is `None`,
/// and an empty input is an empty list.
pub fn parse_booleans(text: &str) -> Vec<Option<bool>> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(SEMICOLON)
        .map(|segment| {
            if segment.eq_ignore_ascii_case("true") {
                Some(true)
            } else if segment.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        })
        .collect()
}

/// Surrounding whitespace is ignored.
fn double(raw: &str) -> Result<f64, QueryError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| QueryError::InvalidNumber(raw.to_string()))
}

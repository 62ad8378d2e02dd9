//! Longitude/latitude coordinate carried as a two-element JSON array.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

impl Point {
    pub fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
        Point {
            longitude,
            latitude,
        }
    }

    pub fn coordinates(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl From<[f64; 2]> for Point {
    fn from(raw: [f64; 2]) -> Self {
        Point::from_lng_lat(raw[0], raw[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        point.coordinates()
    }
}

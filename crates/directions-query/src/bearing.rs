//! Heading constraint for a waypoint.

/// `angle` is clockwise from true north in `0..=360`; `degrees` is the
/// allowed deviation either side of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    pub angle: f64,
    pub degrees: f64,
}

impl Bearing {
    pub fn new(angle: f64, degrees: f64) -> Self {
        Bearing { angle, degrees }
    }
}

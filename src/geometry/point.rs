use std::fmt;
use std::hash::{Hash, Hasher};

use crate::math::Point2;

/// A point in the plane.
///
/// Points are plain values: two points are the same point exactly when
/// their coordinates compare equal. Coordinates are not validated, so a
/// point holding `NaN` is not equal to itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinates as an `(x, y)` pair.
    #[must_use]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        crate::math::distance_2d::distance(self, other)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 == -0.0, so both must feed the hasher the same bits.
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

#[allow(clippy::float_cmp)]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0_f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        p.coords()
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

use std::fmt;

use crate::math::orientation_2d::{orientation, Orientation};
use crate::math::Vector2;

use super::Point;

/// A directed line segment from `p1` to `p2`.
///
/// `Segment::new(a, b)` and `Segment::new(b, a)` are different values: they
/// share a length but see every point on opposite sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    /// Creates a segment directed from `p1` to `p2`. Zero-length segments are allowed.
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Start point.
    #[must_use]
    pub const fn p1(&self) -> Point {
        self.p1
    }

    /// End point.
    #[must_use]
    pub const fn p2(&self) -> Point {
        self.p2
    }

    /// Euclidean length, computed with `hypot` so extreme coordinates
    /// neither overflow nor underflow.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    /// Returns the same segment traversed from `p2` to `p1`.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }

    /// Direction vector `p2 - p1` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(self.p2.x - self.p1.x, self.p2.y - self.p1.y)
    }

    /// Side of this directed segment's supporting line on which `point` lies.
    #[must_use]
    pub fn side_of(&self, point: &Point) -> Orientation {
        orientation(self, point)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.p1, self.p2)
    }
}

use crate::geometry::Point;

/// Euclidean distance between two points.
///
/// Uses `hypot` rather than `sqrt(dx² + dy²)` so that very large or very
/// small coordinate differences do not overflow or underflow. Non-finite
/// coordinates propagate into the result.
#[must_use]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

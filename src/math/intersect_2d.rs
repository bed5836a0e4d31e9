use crate::geometry::Segment;

use super::orientation_2d::orientation;

/// Strict segment-segment crossing test.
///
/// Returns `true` only if the endpoints of `b` lie strictly on opposite
/// sides of `a` and the endpoints of `a` lie strictly on opposite sides of
/// `b`. Segments that share an endpoint, touch, or overlap collinearly do
/// not intersect. No intersection point is computed.
#[must_use]
pub fn intersects(a: &Segment, b: &Segment) -> bool {
    straddles(a, b) && straddles(b, a)
}

/// Whether the endpoints of `other` lie strictly on opposite sides of `line`.
fn straddles(line: &Segment, other: &Segment) -> bool {
    orientation(line, &other.p1()).sign() * orientation(line, &other.p2()).sign() == -1
}

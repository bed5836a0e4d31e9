use crate::geometry::{Point, Polygon, Segment};

use super::intersect_2d::intersects;

/// Abscissa of the ray origin used by [`point_in_polygon`].
///
/// Strictly left of `x = 0`, so the origin is outside every polygon whose
/// vertices all have `x >= 0`, including polygons with an edge on `x = 0`.
pub const RAY_ORIGIN_X: f64 = -1.0;

/// Ray-parity containment test.
///
/// Casts the segment from `(RAY_ORIGIN_X, point.y)` to `point` and counts
/// the polygon edges it strictly crosses; an odd count means inside. The
/// ray origin is only guaranteed to be outside the polygon when every
/// vertex has `x >= 0`, so polygons reaching into negative x are not
/// supported.
///
/// Points on the boundary, and rays that pass exactly through a vertex, are
/// classified by the exact orientation tests and should not be relied on.
/// The answer is still deterministic for a given input.
#[must_use]
pub fn point_in_polygon(point: &Point, polygon: &Polygon) -> bool {
    let ray = Segment::new(Point::new(RAY_ORIGIN_X, point.y), *point);
    let crossings = polygon
        .segments()
        .iter()
        .filter(|edge| intersects(edge, &ray))
        .count();
    tracing::trace!(crossings, "point_in_polygon ray cast");
    crossings % 2 == 1
}

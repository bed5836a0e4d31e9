use crate::error::{OperationError, Result};
use crate::geometry::{Point, Segment};

/// Distance from a point to a segment. Not implemented: every call reports
/// [`OperationError::Unsupported`].
///
/// Point-to-point distance is available as [`crate::math::distance_2d::distance`].
pub struct PointSegmentDistance {
    point: Point,
    segment: Segment,
}

impl PointSegmentDistance {
    /// Creates a new `PointSegmentDistance` query.
    #[must_use]
    pub fn new(point: Point, segment: Segment) -> Self {
        Self { point, segment }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Always returns `OperationError::Unsupported`.
    pub fn execute(&self) -> Result<f64> {
        tracing::debug!(
            point = %self.point,
            segment = %self.segment,
            "point-to-segment distance is unsupported"
        );
        Err(OperationError::Unsupported("point-to-segment distance").into())
    }
}

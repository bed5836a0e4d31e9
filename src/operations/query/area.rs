use crate::error::{OperationError, Result};
use crate::geometry::Shape;

/// Area of a shape. Not implemented: every call reports
/// [`OperationError::Unsupported`] instead of returning an estimate.
pub struct Area<'a> {
    shape: &'a Shape,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(shape: &'a Shape) -> Self {
        Self { shape }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Always returns `OperationError::Unsupported`.
    pub fn execute(&self) -> Result<f64> {
        tracing::debug!(kind = ?self.shape.kind(), "area query is unsupported");
        Err(OperationError::Unsupported("area").into())
    }
}

use thiserror::Error;

/// Top-level error type for the planegeo kernel.
#[derive(Debug, Error)]
pub enum PlanegeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building or mutating primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("vertex index {index} is out of range [0, {len}]")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to queries over primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Convenience type alias for results using [`PlanegeoError`].
pub type Result<T> = std::result::Result<T, PlanegeoError>;

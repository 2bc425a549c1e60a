use thiserror::Error;

/// Errors produced by the geometric kernel.
///
/// Only recoverable input degeneracies are reported this way. Contract
/// violations (out-of-range indices, mismatched matrix dimensions, quantize
/// magnitude breaches) are programmer errors and panic instead; degeneracies
/// discovered while classifying (parallel lines, coincident points) are
/// ordinary enum outcomes of the routine concerned.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

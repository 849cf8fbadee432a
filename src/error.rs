//! Error type shared by every fallible operation in the crate.

/// Errors raised by the aggregation functions and [`Range`](crate::range::Range)
/// construction.
///
/// Every failure is raised before any output is produced; there is no
/// partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// A required argument was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Range bounds are inverted or not comparable.
    #[error("invalid range: lower bound {lower} must not exceed upper bound {upper}")]
    InvalidRange { lower: f64, upper: f64 },
}

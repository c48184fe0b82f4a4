// File: crates/linegraph-core/src/error.rs
// Summary: Error taxonomy for chart mutations (bounds, arguments, handles).

use thiserror::Error;

use crate::axis::{Axis, Bound};
use crate::series::SeriesId;

/// Errors reported by chart setters. Every failure leaves the chart unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Setting `bound` of `axis` to `value` would break `min < max`;
    /// `limit` is the opposite bound it collided with.
    #[error("{axis} axis {bound} {value} must stay {} {limit}", .bound.relation())]
    OutOfRange {
        axis: Axis,
        bound: Bound,
        value: f64,
        limit: f64,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("series {0} is not attached to this chart")]
    NotFound(SeriesId),
}

/// Result type alias using [`ChartError`].
pub type Result<T> = std::result::Result<T, ChartError>;

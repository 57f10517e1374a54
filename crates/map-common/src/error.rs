//! Error types for met-map operations.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for catalog and product operations.
///
/// Missing remote data is not an error: the data server simply may not have
/// a forecast step yet, and callers skip the frame. The catalog lookup is
/// the one place a request can be outright wrong.
#[derive(Debug, Error)]
pub enum MapError {
    /// Model name not in the table for the requested analysis type.
    ///
    /// `valid` carries the names that do resolve, in table order, so callers
    /// can tell the forecaster what to pick instead.
    #[error("unknown model '{}' for {}, choose one of: {}", .model, .analysis, .valid.join(", "))]
    UnknownModel {
        model: String,
        analysis: String,
        valid: Vec<&'static str>,
    },
}

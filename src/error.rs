//! Error types for the map helpers.

use thiserror::Error;

/// Errors surfaced by the grid adapter and the mock data generator.
///
/// h3o failures are wrapped transparently so callers see the library's own
/// message and can still match on its error type.
#[derive(Error, Debug)]
pub enum MapError {
    /// Resolution outside 0..=15.
    #[error(transparent)]
    InvalidResolution(#[from] h3o::error::InvalidResolution),

    /// Unparseable or invalid H3 cell id.
    #[error(transparent)]
    InvalidCellIndex(#[from] h3o::error::InvalidCellIndex),

    /// Polygon rejected by the h3o tiler (non-finite coordinates, etc).
    #[error(transparent)]
    InvalidGeometry(#[from] h3o::error::InvalidGeometry),

    /// Bad argument to the point generator (negative or NaN radius).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Mock data config could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for map operations.
pub type Result<T> = std::result::Result<T, MapError>;

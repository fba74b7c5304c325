//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `rn-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell size must be a positive number of degrees, got {0}")]
    InvalidCellSize(f64),

    #[error("malformed cell key {0:?}: expected \"<latCell>_<lngCell>\"")]
    BadCellKey(String),

    #[error("index payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;

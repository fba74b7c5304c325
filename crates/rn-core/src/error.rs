//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where a coordinate is validated on their behalf.

use thiserror::Error;

/// Errors produced while constructing core values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Shorthand result type for `rn-core`.
pub type CoreResult<T> = Result<T, CoreError>;

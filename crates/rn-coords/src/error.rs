use thiserror::Error;

/// Why a piece of coordinate text could not become a `GeoPoint`.
///
/// Every variant is recoverable: the user corrects the input and retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("no coordinate characters in input")]
    Empty,

    #[error("expected two coordinate values, found {found}")]
    TooFewValues { found: usize },

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("coordinates {lat}, {lng} are outside the valid range")]
    OutOfRange { lat: f64, lng: f64 },
}

pub type CoordResult<T> = Result<T, CoordError>;

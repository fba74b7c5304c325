use thiserror::Error;

use rn_core::FacilityPos;
use rn_spatial::SpatialError;
use rn_store::StoreError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("query configuration error: {0}")]
    Config(String),

    #[error("dataset load failed: {0}")]
    Store(#[from] StoreError),

    #[error("index load failed: {0}")]
    Spatial(#[from] SpatialError),

    #[error("index references position {position} but the dataset has {len} facilities")]
    IndexOutOfRange { position: FacilityPos, len: usize },

    #[error("index covers {indexed} positions for {facilities} facilities")]
    IndexSizeMismatch { indexed: usize, facilities: usize },

    #[error("a load is already in progress")]
    LoadInProgress,

    #[error("no dataset loaded yet")]
    NotLoaded,
}

pub type SessionResult<T> = Result<T, SessionError>;

use std::path::PathBuf;

use thiserror::Error;

use rn_core::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {row} ({id:?}) has an invalid location: {source}")]
    InvalidLocation {
        row:    usize,
        id:     String,
        #[source]
        source: CoreError,
    },

    #[error("{0} records exceed the addressable position range")]
    TooManyRecords(usize),

    #[error("unsupported dataset format for {0:?}: expected .json or .csv")]
    UnknownFormat(PathBuf),

    #[error("dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

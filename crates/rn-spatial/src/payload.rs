//! JSON index payload loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "cell_size_deg": 0.01,
//!   "index": { "1459_12098": [0, 17], "-1_-5": [3] }
//! }
//! ```
//!
//! A missing, `null` or `0` `cell_size_deg` falls back to
//! [`DEFAULT_CELL_SIZE_DEG`]; a missing `index` is an empty index.  Keys are
//! `"<latCell>_<lngCell>"` and values are facility positions.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::info;

use rn_core::FacilityPos;

use crate::{CellKey, DEFAULT_CELL_SIZE_DEG, GridIndex, SpatialResult};

/// Raw shape of an index file.
#[derive(Debug, Deserialize)]
pub struct IndexPayload {
    #[serde(default)]
    pub cell_size_deg: Option<f64>,
    #[serde(default)]
    pub index: HashMap<String, Vec<FacilityPos>>,
}

impl GridIndex {
    /// Convert a decoded payload, parsing every cell key.
    pub fn from_payload(payload: IndexPayload) -> SpatialResult<Self> {
        let cell_size = payload
            .cell_size_deg
            .filter(|&size| size != 0.0)
            .unwrap_or(DEFAULT_CELL_SIZE_DEG);
        let mut buckets: FxHashMap<CellKey, Vec<FacilityPos>> =
            FxHashMap::with_capacity_and_hasher(payload.index.len(), Default::default());
        for (key, positions) in payload.index {
            // "01_2" and "1_2" name the same cell.
            buckets.entry(key.parse::<CellKey>()?).or_default().extend(positions);
        }
        GridIndex::new(cell_size, buckets)
    }
}

/// Load a [`GridIndex`] from an index JSON file.
pub fn load_index_json(path: &Path) -> SpatialResult<GridIndex> {
    let file = std::fs::File::open(path)?;
    load_index_reader(std::io::BufReader::new(file))
}

/// Like [`load_index_json`] but accepts any `Read` source.
pub fn load_index_reader<R: Read>(reader: R) -> SpatialResult<GridIndex> {
    let payload: IndexPayload = serde_json::from_reader(reader)?;
    let index = GridIndex::from_payload(payload)?;
    info!(
        cells = index.bucket_count(),
        entries = index.entry_count(),
        cell_size_deg = index.cell_size_deg(),
        "loaded grid index"
    );
    Ok(index)
}

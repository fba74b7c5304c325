//! Dataset loaders.
//!
//! # Formats
//!
//! JSON — an array of records:
//!
//! ```json
//! [{"id":"SITE-001","property":"Makati Tower","lat":14.5547,"lng":121.0244}]
//! ```
//!
//! CSV — the same field names as the header row:
//!
//! ```csv
//! id,property,lat,lng
//! SITE-001,Makati Tower,14.5547,121.0244
//! ```
//!
//! Loading is all-or-nothing: one record with an out-of-range or
//! non-numeric coordinate fails the whole dataset, and no partial store is
//! ever returned.

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::{Facility, FacilityRecord, FacilityStore, StoreError, StoreResult};

/// Load a dataset file, choosing the format from its extension
/// (`.json` or `.csv`, case-insensitive).
pub fn load_facilities(path: &Path) -> StoreResult<FacilityStore> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let file = || -> StoreResult<_> { Ok(std::io::BufReader::new(std::fs::File::open(path)?)) };
    let store = match ext.as_deref() {
        Some("json") => load_facilities_json_reader(file()?)?,
        Some("csv") => load_facilities_csv_reader(file()?)?,
        _ => return Err(StoreError::UnknownFormat(path.to_path_buf())),
    };

    info!(path = %path.display(), facilities = store.len(), "loaded facility dataset");
    Ok(store)
}

/// Read a JSON array of [`FacilityRecord`]s from any `Read` source.
pub fn load_facilities_json_reader<R: Read>(reader: R) -> StoreResult<FacilityStore> {
    let records: Vec<FacilityRecord> = serde_json::from_reader(reader)?;
    freeze(records.into_iter().map(Ok))
}

/// Read a headed CSV of [`FacilityRecord`]s from any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_facilities_csv_reader<R: Read>(reader: R) -> StoreResult<FacilityStore> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows = csv_reader
        .deserialize::<FacilityRecord>()
        .map(|r| r.map_err(StoreError::Csv));
    freeze(rows)
}

fn freeze<I>(rows: I) -> StoreResult<FacilityStore>
where
    I: Iterator<Item = StoreResult<FacilityRecord>>,
{
    let facilities = rows
        .enumerate()
        .map(|(row, record)| record?.into_facility(row))
        .collect::<StoreResult<Vec<Facility>>>()?;
    FacilityStore::load(facilities)
}

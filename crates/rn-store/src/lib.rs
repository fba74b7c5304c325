//! `rn-store` — the loaded facility dataset.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`facility`] | `Facility`, `FacilityRecord` (raw row shape)             |
//! | [`store`]    | `FacilityStore` (frozen, position-addressed)             |
//! | [`loader`]   | `load_facilities`, JSON and CSV readers                  |
//! | [`error`]    | `StoreError`, `StoreResult<T>`                           |
//!
//! A facility's [`FacilityPos`](rn_core::FacilityPos) is its index in the
//! input sequence.  The grid index refers to facilities only by position, so
//! the store never reorders, inserts, or removes records after loading.

pub mod error;
pub mod facility;
pub mod loader;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use facility::{Facility, FacilityRecord};
pub use loader::{load_facilities, load_facilities_csv_reader, load_facilities_json_reader};
pub use store::FacilityStore;

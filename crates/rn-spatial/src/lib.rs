//! `rn-spatial` — grid-cell index over facility positions.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`cell`]    | `CellKey`, `CellRange` (inclusive cell enumeration)         |
//! | [`grid`]    | `GridIndex` (read-only buckets), `GridIndexBuilder`         |
//! | [`payload`] | `IndexPayload`, `load_index_json`, `load_index_reader`      |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Cell assignment
//!
//! A point at `(lat, lng)` belongs to exactly one cell,
//! `(⌊lat / size⌋, ⌊lng / size⌋)`.  Positions are never duplicated into
//! neighbouring cells, so a radius query must visit every cell its
//! bounding box touches.

pub mod cell;
pub mod error;
pub mod grid;
pub mod payload;


pub use cell::{CellKey, CellRange};
pub use error::{SpatialError, SpatialResult};
pub use grid::{DEFAULT_CELL_SIZE_DEG, GridIndex, GridIndexBuilder};
pub use payload::{IndexPayload, load_index_json, load_index_reader};

//! `rn-core` — foundational types for the `radius_near` facility finder.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no
//! `rn-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `FacilityPos`                                              |
//! | [`geo`]    | `GeoPoint`, haversine distance, degree deltas, `GeoBox`    |
//! | [`error`]  | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types; deserialising a |
//! |         | `GeoPoint` validates its range.                            |

pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{
    EARTH_RADIUS_M, GeoBox, GeoPoint, METERS_PER_DEGREE, degree_deltas, distance_m,
    format_distance,
};
pub use ids::FacilityPos;

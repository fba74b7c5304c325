//! `rn-coords` — turn human-entered coordinate text into a [`GeoPoint`].
//!
//! # Pipeline
//!
//! ```text
//! raw text ─► sanitize ─► DMS tokens? ─┬─► ≥ 2 tokens ─► axis assignment ─┐
//!                                      └─► decimal numbers (first two) ───┤
//!                                                                         ▼
//!                                     swap if |lat| > 90 ≥ |lng| ─► range check
//! ```
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`sanitize`] | `sanitize` — character whitelist + whitespace     |
//! | [`dms`]      | `DmsToken`, `dms_tokens`, `dms_to_decimal`        |
//! | [`parser`]   | `parse`, `normalize`                              |
//! | [`error`]    | `CoordError`, `CoordResult<T>`                    |
//!
//! # Example
//!
//! ```
//! let p = rn_coords::parse("120.9842, 14.5995").unwrap();
//! assert_eq!((p.lat(), p.lng()), (14.5995, 120.9842));
//! ```
//!
//! [`GeoPoint`]: rn_core::GeoPoint

pub mod dms;
pub mod error;
pub mod parser;
pub mod sanitize;


pub use dms::{Axis, DmsToken, dms_to_decimal, dms_tokens};
pub use error::{CoordError, CoordResult};
pub use parser::{normalize, parse};
pub use sanitize::sanitize;

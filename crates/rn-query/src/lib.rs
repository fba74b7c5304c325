//! `rn-query` — "which facilities lie within R metres of P?"
//!
//! # Query pipeline
//!
//! ```text
//! QueryRequest { reference, radius_m }
//!   ① radius ≤ 0        → empty outcome (not an error)
//!   ② GeoBox::around    → lat/lng rectangle enclosing the circle
//!   ③ GridIndex         → deduplicated candidate positions
//!   ④ box prefilter     → drop candidates outside the rectangle
//!   ⑤ haversine filter  → keep distance ≤ radius
//!   ⑥ rank              → ascending distance, ties by position
//!   ⑦ truncate          → at most `max_results`, total still reported
//! ```
//!
//! # Sessions
//!
//! A [`Session`] owns one `FacilityStore` and the `GridIndex` built for it,
//! plus the [`QueryConfig`].  It is constructed once at load time and shared
//! by reference (or `Arc`) with every query.  [`SessionSlot`] holds the
//! current session for long-lived callers and swaps in a reload atomically.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the haversine filter on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let session = SessionBuilder::new(load_facilities(path)?)
//!     .index(load_index_json(index_path)?)
//!     .build()?;
//! let reference = ReferencePoint::from_text("14.5995, 120.9842")?;
//! let outcome = session.query(&reference.request(1_000.0));
//! println!("{}", outcome.summary(1_000.0));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod reference;
pub mod session;


pub use config::QueryConfig;
pub use engine::{QueryOutcome, QueryRequest, RadiusQueryEngine, ScoredResult};
pub use error::{SessionError, SessionResult};
pub use reference::{ReferencePoint, ReferenceSource};
pub use session::{Session, SessionBuilder, SessionSlot, load_session};

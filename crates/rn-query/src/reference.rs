//! Reference points and where they came from.
//!
//! The query engine only needs a [`GeoPoint`]; the label and source are
//! kept for display by whoever renders the results.

use rn_coords::CoordResult;
use rn_core::{FacilityPos, GeoPoint};
use rn_store::Facility;

use crate::QueryRequest;

/// Origin of a reference point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReferenceSource {
    /// Device geolocation supplied by the caller.
    Gps,
    /// Parsed from user-entered coordinate text.
    Coordinates,
    /// Centred on a facility picked from a name search.
    Facility(FacilityPos),
    /// Resolved by an external service (e.g. an address geocoder).
    External,
}

/// The point all distances are measured from.
#[derive(Clone, Debug)]
pub struct ReferencePoint {
    pub point:  GeoPoint,
    pub label:  String,
    pub source: ReferenceSource,
}

impl ReferencePoint {
    pub fn gps(point: GeoPoint) -> Self {
        Self { point, label: "GPS location".into(), source: ReferenceSource::Gps }
    }

    /// Parse coordinate text; see [`rn_coords::parse`].
    pub fn from_text(text: &str) -> CoordResult<Self> {
        Ok(Self {
            point:  rn_coords::parse(text)?,
            label:  "Manual coordinates".into(),
            source: ReferenceSource::Coordinates,
        })
    }

    pub fn facility(pos: FacilityPos, facility: &Facility) -> Self {
        Self {
            point:  facility.location,
            label:  facility.label(),
            source: ReferenceSource::Facility(pos),
        }
    }

    pub fn external(point: GeoPoint, label: impl Into<String>) -> Self {
        Self { point, label: label.into(), source: ReferenceSource::External }
    }

    /// A query around this point.
    pub fn request(&self, radius_m: f64) -> QueryRequest {
        QueryRequest::new(self.point, radius_m)
    }
}

impl std::fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.point)
    }
}

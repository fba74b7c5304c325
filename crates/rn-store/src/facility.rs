//! Facility record types.

use serde::{Deserialize, Serialize};

use rn_core::GeoPoint;

use crate::{StoreError, StoreResult};

/// One dataset record with a validated location.
#[derive(Clone, Debug, Serialize)]
pub struct Facility {
    /// Caller-supplied identifier, e.g. a site name.
    pub id:       String,
    /// Free-text label shown next to the id.
    pub property: String,
    #[serde(flatten)]
    pub location: GeoPoint,
}

impl Facility {
    pub fn new(id: impl Into<String>, property: impl Into<String>, location: GeoPoint) -> Self {
        Self { id: id.into(), property: property.into(), location }
    }

    /// `"<id> — <property>"`, the label used when a facility becomes the
    /// reference point.
    pub fn label(&self) -> String {
        format!("{} — {}", self.id, self.property)
    }
}

/// Raw row shape shared by the JSON and CSV formats:
/// `{ "id", "property", "lat", "lng" }`.
#[derive(Clone, Debug, Deserialize)]
pub struct FacilityRecord {
    pub id:       String,
    #[serde(default)]
    pub property: String,
    pub lat:      f64,
    pub lng:      f64,
}

impl FacilityRecord {
    /// Validate the coordinate.  `row` is only used for error reporting.
    pub fn into_facility(self, row: usize) -> StoreResult<Facility> {
        match GeoPoint::new(self.lat, self.lng) {
            Ok(location) => Ok(Facility { id: self.id, property: self.property, location }),
            Err(source) => Err(StoreError::InvalidLocation { row, id: self.id, source }),
        }
    }
}

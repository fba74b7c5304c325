//! Grid cell coordinates.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::SpatialError;

/// Integer coordinates of one grid cell: `(⌊lat / size⌋, ⌊lng / size⌋)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CellKey {
    pub lat: i64,
    pub lng: i64,
}

impl CellKey {
    #[inline]
    pub fn new(lat: i64, lng: i64) -> Self {
        Self { lat, lng }
    }

    /// Cell containing `(lat, lng)` for a grid of `cell_size_deg` cells.
    #[inline]
    pub fn containing(lat: f64, lng: f64, cell_size_deg: f64) -> Self {
        Self {
            lat: (lat / cell_size_deg).floor() as i64,
            lng: (lng / cell_size_deg).floor() as i64,
        }
    }
}

/// Formats as the payload key, `"<latCell>_<lngCell>"`.
impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.lat, self.lng)
    }
}

/// Parses the payload key format.  Both halves may be negative
/// (`"-1_-5"`).
impl FromStr for CellKey {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || SpatialError::BadCellKey(s.to_string());
        let (lat, lng) = s.split_once('_').ok_or_else(bad)?;
        Ok(Self {
            lat: lat.trim().parse().map_err(|_| bad())?,
            lng: lng.trim().parse().map_err(|_| bad())?,
        })
    }
}

// ── CellRange ─────────────────────────────────────────────────────────────────

/// Every cell in an inclusive rectangle of cell coordinates, row by row.
///
/// Produced by [`GridIndex::cells_overlapping`](crate::GridIndex::cells_overlapping).
/// Iteration allocates nothing.
#[derive(Clone, Debug)]
pub struct CellRange {
    lat: RangeInclusive<i64>,
    lng: RangeInclusive<i64>,
    next: Option<CellKey>,
}

impl CellRange {
    pub fn new(lat: RangeInclusive<i64>, lng: RangeInclusive<i64>) -> Self {
        let next = (!lat.is_empty() && !lng.is_empty())
            .then(|| CellKey::new(*lat.start(), *lng.start()));
        Self { lat, lng, next }
    }

    /// Total number of cells in the rectangle, saturating.
    pub fn cell_count(&self) -> u64 {
        let span = |r: &RangeInclusive<i64>| {
            if r.is_empty() {
                0
            } else {
                (*r.end() as i128 - *r.start() as i128 + 1) as u128
            }
        };
        u64::try_from(span(&self.lat).saturating_mul(span(&self.lng))).unwrap_or(u64::MAX)
    }

    #[inline]
    pub fn contains(&self, key: CellKey) -> bool {
        self.lat.contains(&key.lat) && self.lng.contains(&key.lng)
    }
}

impl Iterator for CellRange {
    type Item = CellKey;

    fn next(&mut self) -> Option<CellKey> {
        let current = self.next?;
        self.next = if current.lng < *self.lng.end() {
            Some(CellKey::new(current.lat, current.lng + 1))
        } else if current.lat < *self.lat.end() {
            Some(CellKey::new(current.lat + 1, *self.lng.start()))
        } else {
            None
        };
        Some(current)
    }
}

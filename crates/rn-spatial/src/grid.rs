//! Read-only grid index and its builder.
//!
//! # Data layout
//!
//! ```text
//! buckets: CellKey ─► [FacilityPos, FacilityPos, …]
//! ```
//!
//! Buckets use `FxHashMap`: keys are small integer pairs, so the
//! non-cryptographic hash is both safe and noticeably faster than SipHash.
//! Only populated cells are stored.

use rustc_hash::{FxHashMap, FxHashSet};

use rn_core::{FacilityPos, GeoBox, GeoPoint};

use crate::{CellKey, CellRange, SpatialError, SpatialResult};

/// Cell size used when a payload does not specify one (~1.1 km of latitude).
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.01;

// ── GridIndex ─────────────────────────────────────────────────────────────────

/// Immutable mapping from grid cell to the facility positions inside it.
///
/// Construct from a payload with [`GridIndex::from_payload`] or in memory
/// with [`GridIndexBuilder`].  The index must describe the same dataset, in
/// the same order, as the `FacilityStore` it is queried against.
#[derive(Debug)]
pub struct GridIndex {
    cell_size_deg: f64,
    buckets:       FxHashMap<CellKey, Vec<FacilityPos>>,
    entry_count:   usize,
}

impl GridIndex {
    /// Wrap pre-computed buckets.  Fails if `cell_size_deg` is not a
    /// positive finite number.
    pub fn new(
        cell_size_deg: f64,
        buckets: FxHashMap<CellKey, Vec<FacilityPos>>,
    ) -> SpatialResult<Self> {
        if !(cell_size_deg.is_finite() && cell_size_deg > 0.0) {
            return Err(SpatialError::InvalidCellSize(cell_size_deg));
        }
        let entry_count = buckets.values().map(Vec::len).sum();
        Ok(Self { cell_size_deg, buckets, entry_count })
    }

    /// An index with no buckets.
    pub fn empty() -> Self {
        Self {
            cell_size_deg: DEFAULT_CELL_SIZE_DEG,
            buckets:       FxHashMap::default(),
            entry_count:   0,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn cell_size_deg(&self) -> f64 {
        self.cell_size_deg
    }

    /// Number of populated cells.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total positions across all buckets.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Largest position referenced by any bucket.
    pub fn max_position(&self) -> Option<FacilityPos> {
        self.buckets.values().flatten().copied().max()
    }

    /// Number of different positions across all buckets.
    pub fn distinct_positions(&self) -> usize {
        self.buckets.values().flatten().collect::<FxHashSet<_>>().len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Cell that `p` is assigned to.
    #[inline]
    pub fn cell_of(&self, p: GeoPoint) -> CellKey {
        CellKey::containing(p.lat(), p.lng(), self.cell_size_deg)
    }

    /// Every cell between `⌊min/size⌋` and `⌊max/size⌋` inclusive on both
    /// axes.  Pure; touches no bucket.
    pub fn cells_overlapping(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    ) -> CellRange {
        let lo = CellKey::containing(min_lat, min_lng, self.cell_size_deg);
        let hi = CellKey::containing(max_lat, max_lng, self.cell_size_deg);
        CellRange::new(lo.lat..=hi.lat, lo.lng..=hi.lng)
    }

    /// Positions in `key`'s bucket; empty for a cell with no facilities.
    #[inline]
    pub fn positions_in(&self, key: CellKey) -> &[FacilityPos] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Deduplicated positions from every cell the box touches, in no
    /// particular order.
    ///
    /// When the box covers more cells than there are populated buckets,
    /// the buckets are scanned by key instead of enumerating empty cells.
    /// Both strategies return the same set.
    pub fn candidates(&self, bbox: &GeoBox) -> Vec<FacilityPos> {
        let ranges: Vec<CellRange> = bbox
            .lng_spans()
            .iter()
            .map(|&(lo, hi)| self.cells_overlapping(bbox.min_lat, bbox.max_lat, lo, hi))
            .collect();
        let cell_count = ranges
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.cell_count()));

        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        let mut take = |bucket: &[FacilityPos]| {
            for &pos in bucket {
                if seen.insert(pos) {
                    out.push(pos);
                }
            }
        };

        if cell_count > self.buckets.len() as u64 {
            for (key, bucket) in &self.buckets {
                if ranges.iter().any(|r| r.contains(*key)) {
                    take(bucket);
                }
            }
        } else {
            for key in ranges.into_iter().flatten() {
                take(self.positions_in(key));
            }
        }
        out
    }
}

// ── GridIndexBuilder ──────────────────────────────────────────────────────────

/// Assign points to cells one at a time, then call [`build`](Self::build).
///
/// Produces the same one-cell-per-position layout as an index payload.
///
/// # Example
///
/// ```
/// use rn_core::{FacilityPos, GeoPoint};
/// use rn_spatial::GridIndexBuilder;
///
/// let mut b = GridIndexBuilder::new(0.01);
/// b.insert(FacilityPos(0), GeoPoint::new(14.5995, 120.9842).unwrap());
/// b.insert(FacilityPos(1), GeoPoint::new(14.5996, 120.9843).unwrap());
/// let idx = b.build().unwrap();
/// assert_eq!(idx.bucket_count(), 1);
/// assert_eq!(idx.entry_count(), 2);
/// ```
pub struct GridIndexBuilder {
    cell_size_deg: f64,
    buckets:       FxHashMap<CellKey, Vec<FacilityPos>>,
}

impl GridIndexBuilder {
    pub fn new(cell_size_deg: f64) -> Self {
        Self { cell_size_deg, buckets: FxHashMap::default() }
    }

    /// Place `pos` in the cell containing `point`.
    pub fn insert(&mut self, pos: FacilityPos, point: GeoPoint) {
        let key = CellKey::containing(point.lat(), point.lng(), self.cell_size_deg);
        self.buckets.entry(key).or_default().push(pos);
    }

    /// Consume the builder.  Fails on a non-positive cell size.
    pub fn build(self) -> SpatialResult<GridIndex> {
        GridIndex::new(self.cell_size_deg, self.buckets)
    }
}

impl GridIndex {
    /// Index `points` by their enumeration order: the `i`-th point gets
    /// `FacilityPos(i)`.
    pub fn from_points<I>(cell_size_deg: f64, points: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut b = GridIndexBuilder::new(cell_size_deg);
        for (i, p) in points.into_iter().enumerate() {
            b.insert(FacilityPos(i as u32), p);
        }
        b.build()
    }
}

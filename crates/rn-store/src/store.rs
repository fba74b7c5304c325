//! Position-addressed facility storage.

use rn_core::{FacilityPos, GeoPoint};

use crate::{Facility, StoreError, StoreResult};

/// Frozen, ordered facility dataset.
///
/// Records keep the order they were loaded in; record `i` is
/// `FacilityPos(i)` for the lifetime of the store.  Locations are also kept
/// in their own contiguous `Vec` so the radius query's hot loop reads
/// nothing but coordinates.
///
/// ```
/// use rn_core::{FacilityPos, GeoPoint};
/// use rn_store::{Facility, FacilityStore};
///
/// let store = FacilityStore::load(vec![
///     Facility::new("SITE-001", "Makati Tower", GeoPoint::new(14.55, 121.02).unwrap()),
/// ])
/// .unwrap();
/// assert_eq!(store.get(FacilityPos(0)).id, "SITE-001");
/// ```
#[derive(Debug)]
pub struct FacilityStore {
    facilities: Vec<Facility>,
    locations:  Vec<GeoPoint>,
    /// Lower-cased `(id, property)` per record for [`search`](Self::search).
    search_keys: Vec<(String, String)>,
}

impl FacilityStore {
    /// Freeze `records`, assigning `FacilityPos(i)` to the `i`-th record.
    pub fn load(records: Vec<Facility>) -> StoreResult<Self> {
        if u32::try_from(records.len()).is_err() {
            return Err(StoreError::TooManyRecords(records.len()));
        }
        let locations = records.iter().map(|f| f.location).collect();
        let search_keys = records
            .iter()
            .map(|f| (f.id.to_lowercase(), f.property.to_lowercase()))
            .collect();
        Ok(Self { facilities: records, locations, search_keys })
    }

    /// A store with no records.
    pub fn empty() -> Self {
        Self { facilities: Vec::new(), locations: Vec::new(), search_keys: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// The facility at `pos`.
    ///
    /// # Panics
    ///
    /// If `pos` is not below [`len`](Self::len).  Positions come from the
    /// grid index built for this store, so an out-of-range one means the two
    /// have diverged.
    #[inline]
    pub fn get(&self, pos: FacilityPos) -> &Facility {
        &self.facilities[pos.index()]
    }

    /// Non-panicking variant of [`get`](Self::get).
    pub fn try_get(&self, pos: FacilityPos) -> Option<&Facility> {
        self.facilities.get(pos.index())
    }

    /// Location of the facility at `pos`.  Panics like [`get`](Self::get).
    #[inline]
    pub fn location(&self, pos: FacilityPos) -> GeoPoint {
        self.locations[pos.index()]
    }

    /// Every location in position order.
    pub fn locations(&self) -> &[GeoPoint] {
        &self.locations
    }

    /// `(position, facility)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (FacilityPos, &Facility)> + '_ {
        self.facilities
            .iter()
            .enumerate()
            .map(|(i, f)| (FacilityPos(i as u32), f))
    }

    /// Case-insensitive substring match on `id` or `property`, in position
    /// order, stopping after `max_matches` hits.
    ///
    /// Lazy: the scan only advances as far as the caller consumes.
    pub fn search<'a>(
        &'a self,
        text: &str,
        max_matches: usize,
    ) -> impl Iterator<Item = (FacilityPos, &'a Facility)> + use<'a> {
        let needle = text.to_lowercase();
        self.search_keys
            .iter()
            .enumerate()
            .filter(move |(_, (id, property))| id.contains(&needle) || property.contains(&needle))
            .take(max_matches)
            .map(move |(i, _)| (FacilityPos(i as u32), &self.facilities[i]))
    }
}

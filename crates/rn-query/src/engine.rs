//! The radius query.

use tracing::debug;

use rn_core::{FacilityPos, GeoBox, GeoPoint, distance_m, format_distance};
use rn_spatial::GridIndex;
use rn_store::FacilityStore;

// ── Request / result types ────────────────────────────────────────────────────

/// Find facilities within `radius_m` metres of `reference`.
#[derive(Copy, Clone, Debug)]
pub struct QueryRequest {
    pub reference: GeoPoint,
    pub radius_m:  f64,
}

impl QueryRequest {
    pub fn new(reference: GeoPoint, radius_m: f64) -> Self {
        Self { reference, radius_m }
    }
}

/// One matched facility.  `distance_m <= radius_m` always holds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoredResult {
    pub position:   FacilityPos,
    pub distance_m: f64,
}

/// Ranked, truncated results plus the number of facilities that matched
/// before truncation.
#[derive(Clone, Debug, Default)]
pub struct QueryOutcome {
    pub results:       Vec<ScoredResult>,
    pub total_matched: usize,
}

impl QueryOutcome {
    /// Number of results actually returned.
    pub fn shown(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_matched == 0
    }

    /// `true` if matches were dropped by the result cap.
    pub fn is_truncated(&self) -> bool {
        self.total_matched > self.results.len()
    }

    /// `"Found N within R m. Showing top K."`
    pub fn summary(&self, radius_m: f64) -> String {
        format!(
            "Found {} within {} m. Showing top {}.",
            self.total_matched,
            radius_m,
            self.shown()
        )
    }

    /// `(result, human-readable distance)` pairs in rank order.
    pub fn formatted(&self) -> impl Iterator<Item = (&ScoredResult, String)> + '_ {
        self.results.iter().map(|r| (r, format_distance(r.distance_m)))
    }
}

// ── RadiusQueryEngine ─────────────────────────────────────────────────────────

/// Borrowed view over a store and the index built for it.
///
/// Holds no state of its own; clone-free and cheap to create per query.
/// Obtain one from [`Session::engine`](crate::Session::engine) or build it
/// directly for tests.
#[derive(Copy, Clone, Debug)]
pub struct RadiusQueryEngine<'a> {
    store:       &'a FacilityStore,
    index:       &'a GridIndex,
    max_results: usize,
}

impl<'a> RadiusQueryEngine<'a> {
    pub fn new(store: &'a FacilityStore, index: &'a GridIndex, max_results: usize) -> Self {
        Self { store, index, max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run one radius query.
    ///
    /// Never fails: a non-positive (or `NaN`) radius, an empty index, or no
    /// facility inside the circle all yield an empty outcome with
    /// `total_matched == 0`.
    pub fn query(&self, request: &QueryRequest) -> QueryOutcome {
        let reference = request.reference;
        let radius_m = request.radius_m;
        if !(radius_m > 0.0) {
            return QueryOutcome::default();
        }

        let bbox = GeoBox::around(reference, radius_m);
        let candidates = self.index.candidates(&bbox);
        let candidate_count = candidates.len();

        let prefiltered: Vec<FacilityPos> = candidates
            .into_iter()
            .filter(|&pos| bbox.contains(self.store.location(pos)))
            .collect();
        let prefiltered_count = prefiltered.len();

        let mut matched = self.within_radius(reference, radius_m, &prefiltered);
        matched.sort_by(|a, b| {
            a.distance_m
                .total_cmp(&b.distance_m)
                .then(a.position.cmp(&b.position))
        });

        let total_matched = matched.len();
        matched.truncate(self.max_results);

        debug!(
            %reference,
            radius_m,
            candidates = candidate_count,
            prefiltered = prefiltered_count,
            matched = total_matched,
            shown = matched.len(),
            "radius query"
        );

        QueryOutcome { results: matched, total_matched }
    }

    #[cfg(not(feature = "parallel"))]
    fn within_radius(
        &self,
        reference: GeoPoint,
        radius_m: f64,
        positions: &[FacilityPos],
    ) -> Vec<ScoredResult> {
        positions
            .iter()
            .filter_map(|&pos| self.score(reference, radius_m, pos))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn within_radius(
        &self,
        reference: GeoPoint,
        radius_m: f64,
        positions: &[FacilityPos],
    ) -> Vec<ScoredResult> {
        use rayon::prelude::*;

        positions
            .par_iter()
            .filter_map(|&pos| self.score(reference, radius_m, pos))
            .collect()
    }

    #[inline]
    fn score(&self, reference: GeoPoint, radius_m: f64, pos: FacilityPos) -> Option<ScoredResult> {
        let d = distance_m(reference, self.store.location(pos));
        (d <= radius_m).then_some(ScoredResult { position: pos, distance_m: d })
    }
}

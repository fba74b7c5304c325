//! Session context: one dataset, its index, and the query configuration.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock, TryLockError};

use tracing::{info, warn};

use rn_core::FacilityPos;
use rn_spatial::{GridIndex, load_index_json};
use rn_store::{Facility, FacilityStore, load_facilities};

use crate::{
    QueryConfig, QueryOutcome, QueryRequest, RadiusQueryEngine, ReferencePoint, SessionError,
    SessionResult,
};

// ── Session ───────────────────────────────────────────────────────────────────

/// Immutable query context.
///
/// The store and index are checked against each other at construction, so a
/// `Session` never answers queries from an index built for another dataset.
/// Create via [`SessionBuilder`].
#[derive(Debug)]
pub struct Session {
    store:  FacilityStore,
    index:  GridIndex,
    config: QueryConfig,
}

impl Session {
    pub fn store(&self) -> &FacilityStore {
        &self.store
    }

    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn engine(&self) -> RadiusQueryEngine<'_> {
        RadiusQueryEngine::new(&self.store, &self.index, self.config.max_results)
    }

    /// See [`RadiusQueryEngine::query`].
    pub fn query(&self, request: &QueryRequest) -> QueryOutcome {
        self.engine().query(request)
    }

    /// Facilities whose id or property contains `text`, for picking a
    /// reference point by name.
    ///
    /// The query is trimmed; fewer than `min_search_chars` characters
    /// returns nothing.  At most `facility_match_limit` matches, in dataset
    /// order.
    pub fn find_facilities(&self, text: &str) -> Vec<(FacilityPos, &Facility)> {
        let text = text.trim();
        if text.chars().count() < self.config.min_search_chars {
            return Vec::new();
        }
        self.store.search(text, self.config.facility_match_limit).collect()
    }

    /// Reference point centred on the facility at `pos`, if it exists.
    pub fn reference_at(&self, pos: FacilityPos) -> Option<ReferencePoint> {
        self.store.try_get(pos).map(|f| ReferencePoint::facility(pos, f))
    }
}

// ── SessionBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for [`Session`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                              |
/// |----------------|------------------------------------------------------|
/// | `.index(i)`    | grid built in memory at `config.cell_size_deg`       |
/// | `.config(c)`   | `QueryConfig::default()`                             |
pub struct SessionBuilder {
    store:  FacilityStore,
    index:  Option<GridIndex>,
    config: QueryConfig,
}

impl SessionBuilder {
    pub fn new(store: FacilityStore) -> Self {
        Self { store, index: None, config: QueryConfig::default() }
    }

    /// Use a pre-built index (normally loaded from an index payload).
    pub fn index(mut self, index: GridIndex) -> Self {
        self.index = Some(index);
        self
    }

    pub fn config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and the store/index pairing.
    pub fn build(self) -> SessionResult<Session> {
        self.config.validate()?;

        let index = match self.index {
            Some(index) => {
                check_index(&self.store, &index)?;
                index
            }
            None => GridIndex::from_points(
                self.config.cell_size_deg,
                self.store.locations().iter().copied(),
            )?,
        };

        Ok(Session { store: self.store, index, config: self.config })
    }
}

fn check_index(store: &FacilityStore, index: &GridIndex) -> SessionResult<()> {
    if let Some(position) = index.max_position() {
        if position.index() >= store.len() {
            return Err(SessionError::IndexOutOfRange { position, len: store.len() });
        }
    }
    // A position listed in two buckets is tolerated; candidates are deduplicated.
    let indexed = index.distinct_positions();
    if indexed != store.len() {
        return Err(SessionError::IndexSizeMismatch { indexed, facilities: store.len() });
    }
    Ok(())
}

/// Load a dataset file and, if given, its index file, then build a session.
pub fn load_session(
    data: &Path,
    index: Option<&Path>,
    config: QueryConfig,
) -> SessionResult<Session> {
    let store = load_facilities(data)?;
    let mut builder = SessionBuilder::new(store).config(config);
    if let Some(path) = index {
        builder = builder.index(load_index_json(path)?);
    }
    builder.build()
}

// ── SessionSlot ───────────────────────────────────────────────────────────────

/// Holder for the current session of a long-lived caller.
///
/// - Before the first successful [`load`](Self::load), queries fail with
///   [`SessionError::NotLoaded`].
/// - A load replaces store and index together; a failed load leaves the
///   previous session in place.
/// - Loads do not nest: a second `load` while one is running fails with
///   [`SessionError::LoadInProgress`].
/// - In-flight queries keep the `Arc<Session>` they started with.
#[derive(Default)]
pub struct SessionSlot {
    current: RwLock<Option<Arc<Session>>>,
    loading: Mutex<()>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `load` and, on success, install its session.
    pub fn load<F>(&self, load: F) -> SessionResult<Arc<Session>>
    where
        F: FnOnce() -> SessionResult<Session>,
    {
        let _guard = match self.loading.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(p)) => p.into_inner(),
            Err(TryLockError::WouldBlock) => return Err(SessionError::LoadInProgress),
        };

        let session = match load() {
            Ok(s) => Arc::new(s),
            Err(e) => {
                warn!(error = %e, retained = self.is_loaded(), "session load failed");
                return Err(e);
            }
        };

        info!(
            facilities = session.store().len(),
            cells = session.index().bucket_count(),
            cell_size_deg = session.index().cell_size_deg(),
            "session loaded"
        );
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(session)
    }

    /// The installed session.
    pub fn current(&self) -> SessionResult<Arc<Session>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(SessionError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Query the installed session.
    pub fn query(&self, request: &QueryRequest) -> SessionResult<QueryOutcome> {
        Ok(self.current()?.query(request))
    }
}

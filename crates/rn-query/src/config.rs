//! Query tuning knobs.

use rn_spatial::DEFAULT_CELL_SIZE_DEG;

use crate::{SessionError, SessionResult};

/// Per-session configuration.
///
/// | Field                  | Default | Meaning                                   |
/// |------------------------|---------|-------------------------------------------|
/// | `max_results`          | 50      | results handed back per query             |
/// | `facility_match_limit` | 20      | facility-name matches per lookup          |
/// | `min_search_chars`     | 2       | shorter lookups return nothing            |
/// | `cell_size_deg`        | 0.01    | grid size when the index is built in memory |
#[derive(Clone, Debug)]
pub struct QueryConfig {
    pub max_results:          usize,
    pub facility_match_limit: usize,
    pub min_search_chars:     usize,
    pub cell_size_deg:        f64,
}

impl QueryConfig {
    pub fn validate(&self) -> SessionResult<()> {
        if self.max_results == 0 {
            return Err(SessionError::Config("max_results must be at least 1".into()));
        }
        if !(self.cell_size_deg.is_finite() && self.cell_size_deg > 0.0) {
            return Err(SessionError::Config(format!(
                "cell_size_deg must be positive, got {}",
                self.cell_size_deg
            )));
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_results:          50,
            facility_match_limit: 20,
            min_search_chars:     2,
            cell_size_deg:        DEFAULT_CELL_SIZE_DEG,
        }
    }
}

//! Seating service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of events the service journal retains.
pub const DEFAULT_JOURNAL_LIMIT: usize = 1_000;

/// Configuration for a [`SeatingService`](crate::SeatingService).
///
/// Missing fields fall back to their defaults when deserializing:
/// - `floor_plan`: capacities of the tables to add on startup, in order (default: none)
/// - `journal_limit`: events kept in the journal, `0` for unbounded (default: `1000`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    pub floor_plan: Vec<i32>,
    pub journal_limit: usize,
}

impl SeatingConfig {
    /// Parses configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replaces the floor plan.
    pub fn with_floor_plan(mut self, capacities: impl IntoIterator<Item = i32>) -> Self {
        self.floor_plan = capacities.into_iter().collect();
        self
    }

    /// Sets how many events the journal keeps.
    pub fn with_journal_limit(mut self, limit: usize) -> Self {
        self.journal_limit = limit;
        self
    }
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            floor_plan: Vec::new(),
            journal_limit: DEFAULT_JOURNAL_LIMIT,
        }
    }
}

//! Per-location reroll counters
//!
//! Owned by the caller and threaded into [`select_outfit`] on every
//! request; the selector itself keeps no state.
//!
//! [`select_outfit`]: super::select_outfit

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RerollState {
    counters: HashMap<String, u32>,
}

impl RerollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a location at counter 0
    pub fn add_location(&mut self, location_id: impl Into<String>) {
        self.counters.insert(location_id.into(), 0);
    }

    /// Current counter, 0 for unknown locations
    #[must_use]
    pub fn counter(&self, location_id: &str) -> u32 {
        self.counters.get(location_id).copied().unwrap_or(0)
    }

    /// Ask for an alternate outfit; returns the new counter
    pub fn reroll(&mut self, location_id: &str) -> u32 {
        let counter = self.counters.entry(location_id.to_string()).or_insert(0);
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn remove_location(&mut self, location_id: &str) -> Option<u32> {
        self.counters.remove(location_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

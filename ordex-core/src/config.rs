//! Host-configurable query behavior.

use crate::sql::Driver;
use serde::{Deserialize, Serialize};

/// Settings a host application loads alongside its own configuration.
///
/// Page sizes are clamped, not trusted: a request may ask for any
/// window, but `max_page_size` bounds what a compiled query will fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Engine the generated SQL targets
    pub driver: Driver,
    /// Window applied when a list query names no page
    pub default_page_size: u64,
    /// Upper bound on any requested window
    pub max_page_size: u64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            driver: Driver::default(),
            default_page_size: 20,
            max_page_size: 500,
        }
    }
}

impl QueryOptions {
    /// Clamp a requested limit to the configured bound.
    pub fn clamp_limit(&self, requested: u64) -> u64 {
        requested.min(self.max_page_size)
    }
}

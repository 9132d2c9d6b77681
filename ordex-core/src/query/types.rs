use crate::sql::Value;
use serde::{Deserialize, Serialize};

/// Declarative filter on a list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// `column = value`
    Eq { column: String, value: Value },
    /// Case-insensitive substring match
    Like { column: String, pattern: String },
    /// Inclusive range
    Between {
        column: String,
        min: Value,
        max: Value,
    },
    /// Set membership
    In { column: String, values: Vec<Value> },
    /// At least one related row exists
    Has { relation: String },
    /// No related row exists
    DoesntHave { relation: String },
}

/// Pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

impl Page {
    /// Window for a zero-based page number.
    pub fn number(page: u64, per_page: u64) -> Self {
        Self {
            offset: page * per_page,
            limit: per_page,
        }
    }
}

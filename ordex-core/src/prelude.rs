//! Convenience re-exports for downstream crates.

pub use crate::config::QueryOptions;
pub use crate::error::{QueryError, Result};
pub use crate::query::sorting::{
    BelongsToManySort, BelongsToSort, DefaultSort, HasManySort, HasOneSort, NullSort, Sort,
    SortField, SortStrategy,
};
pub use crate::query::{Filter, ListQuery, ListQueryBuilder, Page};
pub use crate::sql::{Driver, Fragment, RenderedQuery, SelectQuery, Value};
pub use ordex_model::prelude::*;

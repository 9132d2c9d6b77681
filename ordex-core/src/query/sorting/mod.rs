//! Relationship-aware ordering for list queries
//!
//! This module provides:
//! - A parser for `relation.column:direction` sort specifiers
//! - The `Sort` dispatcher that validates a specifier and picks a strategy
//! - The strategy family covering direct columns, nullable columns, and
//!   every declared relation kind
//! - The sortable-column helper used for validation

pub mod columns;
pub mod field;
pub mod sort;
pub mod strategies;

#[cfg(test)]
mod tests;

pub use field::SortField;
pub use sort::Sort;
pub use strategies::{
    BelongsToManySort, BelongsToSort, DefaultSort, HasManySort, HasOneSort, NullSort, SortStrategy,
};

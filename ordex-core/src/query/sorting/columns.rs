//! Sortable-column helper.

use crate::error::{QueryError, Result};
use ordex_model::EntityDef;

/// Columns a caller may sort the given entity by.
pub fn available_sort_columns(entity: &'static EntityDef) -> &'static [&'static str] {
    entity.sortable_columns
}

/// Fail with `FieldNotSupported` unless `column` is sortable on the
/// entity.
pub fn ensure_sortable(entity: &EntityDef, column: &str) -> Result<()> {
    if entity.is_sortable(column) {
        Ok(())
    } else {
        Err(QueryError::FieldNotSupported(format!(
            "{}.{column}",
            entity.table
        )))
    }
}

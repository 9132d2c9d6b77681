//! Translation of declarative filters into WHERE predicates.

use super::exists;
use super::types::Filter;
use crate::error::{QueryError, Result};
use crate::sql::{Fragment, SelectQuery};
use ordex_model::EntityDef;

/// AND every filter onto the query.
///
/// Column names are validated against the entity descriptor before any
/// SQL text is assembled; unknown columns are caller errors, not typos
/// to pass through to the database.
pub fn apply_filters(
    entity: &'static EntityDef,
    mut query: SelectQuery,
    filters: &[Filter],
) -> Result<SelectQuery> {
    for filter in filters {
        let predicate = translate(entity, &query, filter)?;
        query = query.and_where(predicate);
    }
    Ok(query)
}

fn translate(entity: &'static EntityDef, query: &SelectQuery, filter: &Filter) -> Result<Fragment> {
    match filter {
        Filter::Eq { column, value } => {
            let column = checked_column(entity, column)?;
            let mut predicate = Fragment::raw(format!("{column} = "));
            predicate.push_bind(value.clone());
            Ok(predicate)
        }
        Filter::Like { column, pattern } => {
            let column = checked_column(entity, column)?;
            let pattern = format!("%{pattern}%");
            let mut predicate = Fragment::new();
            if query.driver().supports_ilike() {
                predicate.push(format!("{column} ILIKE "));
                predicate.push_bind(pattern);
            } else {
                predicate.push(format!("LOWER({column}) LIKE LOWER("));
                predicate.push_bind(pattern);
                predicate.push(")");
            }
            Ok(predicate)
        }
        Filter::Between { column, min, max } => {
            let column = checked_column(entity, column)?;
            let mut predicate = Fragment::raw(format!("{column} BETWEEN "));
            predicate.push_bind(min.clone());
            predicate.push(" AND ");
            predicate.push_bind(max.clone());
            Ok(predicate)
        }
        Filter::In { column, values } => {
            let column = checked_column(entity, column)?;
            if values.is_empty() {
                // An empty set matches nothing; keep the clause valid.
                return Ok(Fragment::raw("FALSE"));
            }
            let mut predicate = Fragment::raw(format!("{column} IN ("));
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    predicate.push(", ");
                }
                predicate.push_bind(value.clone());
            }
            predicate.push(")");
            Ok(predicate)
        }
        Filter::Has { relation } => exists::has(entity, relation),
        Filter::DoesntHave { relation } => exists::doesnt_have(entity, relation),
    }
}

fn checked_column(entity: &EntityDef, column: &str) -> Result<String> {
    if entity.is_sortable(column) {
        Ok(entity.qualify(column))
    } else {
        Err(QueryError::FieldNotSupported(format!(
            "{}.{column}",
            entity.table
        )))
    }
}

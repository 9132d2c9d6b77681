//! Relation-existence predicates.
//!
//! `has` and `doesnt_have` translate a declared relation into a
//! correlated `EXISTS` subquery against the related table, using the
//! same key equations the sort strategies use. Many-to-many relations
//! correlate through their pivot.

use crate::error::{QueryError, Result};
use crate::sql::Fragment;
use ordex_model::{EntityDef, RelationKind};

/// Predicate matching parents with at least one related row.
pub fn has(entity: &'static EntityDef, relation: &str) -> Result<Fragment> {
    existence(entity, relation, false)
}

/// Predicate matching parents with no related row.
pub fn doesnt_have(entity: &'static EntityDef, relation: &str) -> Result<Fragment> {
    existence(entity, relation, true)
}

fn existence(entity: &'static EntityDef, relation: &str, negated: bool) -> Result<Fragment> {
    let def = entity.relation(relation).ok_or_else(|| {
        QueryError::RelationshipNotSupported(format!("{}.{relation}", entity.table))
    })?;

    let prefix = if negated { "NOT EXISTS" } else { "EXISTS" };

    let subquery = match def.kind {
        RelationKind::HasOne | RelationKind::HasMany | RelationKind::BelongsTo => {
            let (related_side, parent_side) = def.key_equation(entity);
            format!(
                "SELECT 1 FROM {} WHERE {related_side} = {parent_side}",
                def.related.table
            )
        }
        RelationKind::BelongsToMany => {
            let pivot = def.pivot.ok_or_else(|| {
                QueryError::RelationshipNotSupported(format!("{}.{relation}", entity.table))
            })?;
            format!(
                "SELECT 1 FROM {} JOIN {} ON {} = {} WHERE {} = {}",
                pivot.table,
                def.related.table,
                def.related.qualified_key(),
                pivot.qualify(pivot.related_key),
                pivot.qualify(pivot.parent_key),
                entity.qualified_key()
            )
        }
        RelationKind::None => {
            return Err(QueryError::RelationshipNotSupported(format!(
                "{}.{relation}",
                entity.table
            )));
        }
    };

    Ok(Fragment::raw(format!("{prefix} ({subquery})")))
}

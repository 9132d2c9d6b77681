use super::columns;
use super::field::SortField;
use super::strategies::{
    BelongsToManySort, BelongsToSort, HasManySort, HasOneSort, NullSort, SortStrategy,
};
use crate::error::{QueryError, Result};
use crate::sql::SelectQuery;
use ordex_model::{EntityDef, RelationDef, RelationKind};
use tracing::debug;

/// Relationship-aware ORDER BY dispatcher.
///
/// Construction parses and validates the sort specifier; [`Sort::apply`]
/// consumes the dispatcher and returns the query with ordering applied.
/// One decision tree per invocation, nothing cached across calls.
#[derive(Debug)]
pub struct Sort<'a> {
    entity: &'static EntityDef,
    field: SortField,
    column: &'a str,
    query: SelectQuery,
}

impl<'a> Sort<'a> {
    /// Parse `field` and validate its target column against the
    /// sortable columns of the entity it lands on (the related entity
    /// for dotted specifiers, the base entity otherwise).
    pub fn new(
        entity: &'static EntityDef,
        field: &str,
        column: &'a str,
        query: SelectQuery,
    ) -> Result<Self> {
        let field = SortField::parse(field)?;

        let target = match field.relation() {
            Some(name) => Self::declared_relation(entity, name)?.related,
            None => entity,
        };
        columns::ensure_sortable(target, field.column())?;

        Ok(Self {
            entity,
            field,
            column,
            query,
        })
    }

    /// Apply the matching strategy and return the mutated query.
    pub fn apply(self) -> Result<SelectQuery> {
        let Sort {
            entity,
            field,
            column,
            query,
        } = self;

        let direction = field.direction();

        let Some(name) = field.relation() else {
            debug!(column, %direction, "sorting by direct column");
            return Ok(NullSort { column, direction }.apply(query));
        };

        let relation = Self::declared_relation(entity, name)?;
        debug!(
            relation = name,
            kind = ?relation.kind,
            column,
            %direction,
            "sorting by relation"
        );

        // Null precedence first: rows with no related value group at a
        // deterministic end before the strategy's own ordering applies.
        let query = query.order_by_raw(format!("{} IS NULL", field.path()));

        let sorted = match relation.kind {
            RelationKind::HasOne => HasOneSort {
                parent: entity,
                relation,
                column,
                direction,
            }
            .apply(query),
            RelationKind::HasMany => HasManySort {
                parent: entity,
                relation,
                column,
                direction,
            }
            .apply(query),
            RelationKind::BelongsTo => BelongsToSort {
                parent: entity,
                relation,
                column,
                direction,
            }
            .apply(query),
            RelationKind::BelongsToMany => {
                let pivot = relation.pivot.ok_or_else(|| {
                    QueryError::RelationshipNotSupported(format!("{}.{name}", entity.table))
                })?;
                BelongsToManySort {
                    parent: entity,
                    related: relation.related,
                    pivot,
                    column,
                    direction,
                }
                .apply(query)
            }
            RelationKind::None => {
                return Err(QueryError::RelationshipNotSupported(format!(
                    "{}.{name}",
                    entity.table
                )));
            }
        };

        Ok(sorted)
    }

    fn declared_relation(
        entity: &'static EntityDef,
        name: &str,
    ) -> Result<&'static RelationDef> {
        entity.relation(name).ok_or_else(|| {
            QueryError::RelationshipNotSupported(format!("{}.{name}", entity.table))
        })
    }
}

//! Strategy family for relationship-aware ordering.
//!
//! Every strategy appends ordering state to a select under
//! construction and hands the query back; instances are built per
//! invocation and own nothing beyond that call.

use crate::sql::SelectQuery;
use ordex_model::{Direction, EntityDef, PivotDef, RelationDef};

/// A sorting strategy appends ordering to the given query.
pub trait SortStrategy {
    /// Apply this strategy, returning the query with its ordering
    /// appended.
    fn apply(self, query: SelectQuery) -> SelectQuery;
}

/// `ORDER BY column direction`, no relation or null awareness.
///
/// Not reached through the dispatcher; used for generic top-level
/// sorts such as a list query's primary-key default ordering.
#[derive(Debug, Clone, Copy)]
pub struct DefaultSort<'a> {
    pub column: &'a str,
    pub direction: Direction,
}

impl SortStrategy for DefaultSort<'_> {
    fn apply(self, query: SelectQuery) -> SelectQuery {
        query.order_by(self.column, self.direction)
    }
}

/// Direct-column ordering with driver-aware null placement.
///
/// Postgres accepts `NULLS LAST` natively; every other engine gets a
/// leading `(column IS NULL)` key so null rows group at one end.
#[derive(Debug, Clone, Copy)]
pub struct NullSort<'a> {
    pub column: &'a str,
    pub direction: Direction,
}

impl SortStrategy for NullSort<'_> {
    fn apply(self, query: SelectQuery) -> SelectQuery {
        if query.driver().supports_nulls_ordering() {
            query.order_by_nulls_last(self.column, self.direction)
        } else {
            query
                .order_by_raw(format!("({} IS NULL)", self.column))
                .order_by(self.column, self.direction)
        }
    }
}

/// Order by the owner row's column through a correlated subquery.
#[derive(Debug, Clone, Copy)]
pub struct BelongsToSort<'a> {
    pub parent: &'static EntityDef,
    pub relation: &'static RelationDef,
    pub column: &'a str,
    pub direction: Direction,
}

impl SortStrategy for BelongsToSort<'_> {
    fn apply(self, query: SelectQuery) -> SelectQuery {
        subquery_sort(query, self.parent, self.relation, self.column, self.direction)
    }
}

/// Order by the single child row's column through a correlated
/// subquery.
#[derive(Debug, Clone, Copy)]
pub struct HasOneSort<'a> {
    pub parent: &'static EntityDef,
    pub relation: &'static RelationDef,
    pub column: &'a str,
    pub direction: Direction,
}

impl SortStrategy for HasOneSort<'_> {
    fn apply(self, query: SelectQuery) -> SelectQuery {
        subquery_sort(query, self.parent, self.relation, self.column, self.direction)
    }
}

/// Order by the extremal child-row column through a correlated
/// subquery; `LIMIT 1` under the subquery's own ordering picks the
/// value consistent with the requested direction.
#[derive(Debug, Clone, Copy)]
pub struct HasManySort<'a> {
    pub parent: &'static EntityDef,
    pub relation: &'static RelationDef,
    pub column: &'a str,
    pub direction: Direction,
}

impl SortStrategy for HasManySort<'_> {
    fn apply(self, query: SelectQuery) -> SelectQuery {
        subquery_sort(query, self.parent, self.relation, self.column, self.direction)
    }
}

/// Order through a pivot by aggregating the related column per parent
/// group: `MAX` descending, `MIN` ascending. Aggregation is the only
/// way to derive one ordering value per parent when the pivot fans out.
#[derive(Debug, Clone, Copy)]
pub struct BelongsToManySort<'a> {
    pub parent: &'static EntityDef,
    pub related: &'static EntityDef,
    pub pivot: PivotDef,
    pub column: &'a str,
    pub direction: Direction,
}

impl SortStrategy for BelongsToManySort<'_> {
    fn apply(self, query: SelectQuery) -> SelectQuery {
        let aggregate = if self.direction.is_descending() {
            "MAX"
        } else {
            "MIN"
        };
        let target = self.related.qualify(self.column);

        query
            .join(
                self.pivot.table,
                format!(
                    "{} = {}",
                    self.pivot.qualify(self.pivot.parent_key),
                    self.parent.qualified_key()
                ),
            )
            .join(
                self.related.table,
                format!(
                    "{} = {}",
                    self.related.qualified_key(),
                    self.pivot.qualify(self.pivot.related_key)
                ),
            )
            .group_by(self.parent.qualified_key())
            .order_by_raw(format!(
                "{aggregate}({target}) {}",
                self.direction.as_sql()
            ))
    }
}

/// The zero-or-one related row makes a scalar subquery the only join-
/// free way to order the parent; `LIMIT 1` keeps it scalar when the
/// relation fans out.
fn subquery_sort(
    query: SelectQuery,
    parent: &'static EntityDef,
    relation: &'static RelationDef,
    column: &str,
    direction: Direction,
) -> SelectQuery {
    let related = relation.related;
    let target = related.qualify(column);
    let (related_side, parent_side) = relation.key_equation(parent);

    query.order_by_raw(format!(
        "(SELECT {target} FROM {} WHERE {related_side} = {parent_side} \
         ORDER BY {target} {direction} LIMIT 1) {direction}",
        related.table,
        direction = direction.as_sql(),
    ))
}

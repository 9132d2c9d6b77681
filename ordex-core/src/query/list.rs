//! Declarative list queries and their fluent builder.

use super::filtering::apply_filters;
use super::sorting::{DefaultSort, Sort, SortField, SortStrategy};
use super::types::{Filter, Page};
use crate::config::QueryOptions;
use crate::error::Result;
use crate::sql::{SelectQuery, Value};
use ordex_model::{Direction, EntityDef};
use serde::{Deserialize, Serialize};

/// Everything a caller may ask of a list endpoint: filters, one sort
/// specifier, and a pagination window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filters: Vec<Filter>,
    /// Sort specifier, e.g. `author.name:desc`
    pub sort: Option<String>,
    pub page: Option<Page>,
}

impl ListQuery {
    pub fn builder() -> ListQueryBuilder {
        ListQueryBuilder::new()
    }

    /// Compile into a renderable select against the given entity.
    ///
    /// Filters apply first, then the sort dispatch, then pagination
    /// clamped to the configured maximum. With no sort specifier the
    /// entity's primary key orders ascending.
    pub fn compile(&self, entity: &'static EntityDef, options: &QueryOptions) -> Result<SelectQuery> {
        let query = SelectQuery::new(options.driver, entity.table);
        let query = apply_filters(entity, query, &self.filters)?;

        let query = match &self.sort {
            Some(field) => {
                let parsed = SortField::parse(field)?;
                Sort::new(entity, field, parsed.column(), query)?.apply()?
            }
            None => DefaultSort {
                column: &entity.qualified_key(),
                direction: Direction::Asc,
            }
            .apply(query),
        };

        let page = self.page.unwrap_or(Page {
            offset: 0,
            limit: options.default_page_size,
        });

        Ok(query
            .limit(options.clamp_limit(page.limit))
            .offset(page.offset))
    }
}

/// Fluent API for building list queries
#[derive(Debug, Clone, Default)]
pub struct ListQueryBuilder {
    query: ListQuery,
}

impl ListQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    pub fn filter(mut self, filter: Filter) -> Self {
        self.query.filters.push(filter);
        self
    }

    /// Filter on column equality
    pub fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(Filter::Eq {
            column: column.into(),
            value: value.into(),
        })
    }

    /// Filter on a case-insensitive substring match
    pub fn like(self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filter(Filter::Like {
            column: column.into(),
            pattern: pattern.into(),
        })
    }

    /// Filter on an inclusive range
    pub fn between(
        self,
        column: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Self {
        self.filter(Filter::Between {
            column: column.into(),
            min: min.into(),
            max: max.into(),
        })
    }

    /// Keep rows with at least one related row
    pub fn has(self, relation: impl Into<String>) -> Self {
        self.filter(Filter::Has {
            relation: relation.into(),
        })
    }

    /// Keep rows with no related row
    pub fn doesnt_have(self, relation: impl Into<String>) -> Self {
        self.filter(Filter::DoesntHave {
            relation: relation.into(),
        })
    }

    // === Sort methods ===

    /// Set the sort specifier (`column`, `relation.column`, optional
    /// `:desc` suffix)
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.query.sort = Some(field.into());
        self
    }

    // === Pagination methods ===

    pub fn limit(mut self, limit: u64) -> Self {
        let page = self.query.page.get_or_insert_with(Page::default);
        page.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        let page = self.query.page.get_or_insert_with(Page::default);
        page.offset = offset;
        self
    }

    /// Set page (convenience method)
    pub fn page(mut self, page: u64, per_page: u64) -> Self {
        self.query.page = Some(Page::number(page, per_page));
        self
    }

    // === Build method ===

    pub fn build(self) -> ListQuery {
        self.query
    }
}

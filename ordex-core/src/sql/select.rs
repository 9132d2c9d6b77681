use super::driver::Driver;
use super::fragment::Fragment;
use super::value::Value;
use ordex_model::Direction;

/// Inner join against another table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub table: String,
    pub on: String,
}

/// A single ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderClause {
    /// `expr direction`, optionally suffixed `NULLS LAST`
    Column {
        expr: String,
        direction: Direction,
        nulls_last: bool,
    },
    /// Ordering expression emitted verbatim
    Raw(String),
}

/// A rendered statement: final SQL plus its binds in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub sql: String,
    pub binds: Vec<Value>,
}

/// SELECT statement under construction.
///
/// Builder methods move the query through the chain; rendering is pure,
/// so equal queries always render byte-identical SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    driver: Driver,
    table: &'static str,
    columns: Vec<String>,
    joins: Vec<Join>,
    predicates: Vec<Fragment>,
    group_by: Vec<String>,
    order_by: Vec<OrderClause>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectQuery {
    pub fn new(driver: Driver, table: &'static str) -> Self {
        Self {
            driver,
            table,
            columns: Vec::new(),
            joins: Vec::new(),
            predicates: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Add a column (or expression) to the select list. With no
    /// explicit columns the query selects `table.*`.
    pub fn select(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn join(mut self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.joins.push(Join {
            table: table.into(),
            on: on.into(),
        });
        self
    }

    /// AND a predicate fragment onto the WHERE clause.
    pub fn and_where(mut self, predicate: Fragment) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// AND a literal predicate onto the WHERE clause.
    pub fn and_where_raw(self, sql: impl Into<String>) -> Self {
        self.and_where(Fragment::raw(sql))
    }

    pub fn group_by(mut self, expr: impl Into<String>) -> Self {
        self.group_by.push(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push(OrderClause::Column {
            expr: expr.into(),
            direction,
            nulls_last: false,
        });
        self
    }

    /// `ORDER BY expr direction NULLS LAST`; the caller is responsible
    /// for only using this on drivers that accept the syntax.
    pub fn order_by_nulls_last(mut self, expr: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push(OrderClause::Column {
            expr: expr.into(),
            direction,
            nulls_last: true,
        });
        self
    }

    pub fn order_by_raw(mut self, sql: impl Into<String>) -> Self {
        self.order_by.push(OrderClause::Raw(sql.into()));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Ordering state accumulated so far, in emission order.
    pub fn order_clauses(&self) -> &[OrderClause] {
        &self.order_by
    }

    /// Assemble the whole statement as one fragment, ready to render or
    /// to replay through a driver-specific builder.
    pub fn to_fragment(&self) -> Fragment {
        let mut statement = Fragment::raw("SELECT ");

        if self.columns.is_empty() {
            statement.push(format!("{}.*", self.table));
        } else {
            statement.push(self.columns.join(", "));
        }

        statement.push(format!(" FROM {}", self.table));

        for join in &self.joins {
            statement.push(format!(" JOIN {} ON {}", join.table, join.on));
        }

        for (index, predicate) in self.predicates.iter().enumerate() {
            statement.push(if index == 0 { " WHERE (" } else { " AND (" });
            statement.append(predicate.clone());
            statement.push(")");
        }

        if !self.group_by.is_empty() {
            statement.push(format!(" GROUP BY {}", self.group_by.join(", ")));
        }

        for (index, clause) in self.order_by.iter().enumerate() {
            statement.push(if index == 0 { " ORDER BY " } else { ", " });
            match clause {
                OrderClause::Column {
                    expr,
                    direction,
                    nulls_last,
                } => {
                    statement.push(format!("{expr} {}", direction.as_sql()));
                    if *nulls_last {
                        statement.push(" NULLS LAST");
                    }
                }
                OrderClause::Raw(sql) => {
                    statement.push(sql);
                }
            }
        }

        if let Some(limit) = self.limit {
            statement.push(" LIMIT ");
            statement.push_bind(limit as i64);
        }

        if let Some(offset) = self.offset {
            statement.push(" OFFSET ");
            statement.push_bind(offset as i64);
        }

        statement
    }

    /// Render the final SQL and its bind list.
    pub fn render(&self) -> RenderedQuery {
        let mut sql = String::new();
        let mut binds = Vec::new();
        self.to_fragment().render_into(&mut sql, &mut binds, self.driver);
        RenderedQuery { sql, binds }
    }

    /// Render just the SQL text.
    pub fn to_sql(&self) -> String {
        self.render().sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_select_targets_the_whole_table() {
        let query = SelectQuery::new(Driver::Postgres, "posts");
        assert_eq!(query.to_sql(), "SELECT posts.* FROM posts");
    }

    #[test]
    fn clauses_assemble_in_statement_order() {
        let mut predicate = Fragment::raw("posts.title ILIKE ");
        predicate.push_bind("%rust%");

        let query = SelectQuery::new(Driver::Postgres, "posts")
            .select("posts.id")
            .select("posts.title")
            .join("authors", "authors.id = posts.author_id")
            .and_where(predicate)
            .group_by("posts.id")
            .order_by("posts.title", Direction::Desc)
            .limit(10)
            .offset(20);

        let rendered = query.render();
        assert_eq!(
            rendered.sql,
            "SELECT posts.id, posts.title FROM posts \
             JOIN authors ON authors.id = posts.author_id \
             WHERE (posts.title ILIKE $1) \
             GROUP BY posts.id \
             ORDER BY posts.title DESC \
             LIMIT $2 OFFSET $3"
        );
        assert_eq!(
            rendered.binds,
            vec![
                Value::Text("%rust%".to_string()),
                Value::Int(10),
                Value::Int(20),
            ]
        );
    }

    #[test]
    fn multiple_predicates_are_anded() {
        let query = SelectQuery::new(Driver::Sqlite, "posts")
            .and_where_raw("posts.published = 1")
            .and_where_raw("posts.views > 0");
        assert_eq!(
            query.to_sql(),
            "SELECT posts.* FROM posts WHERE (posts.published = 1) AND (posts.views > 0)"
        );
    }

    #[test]
    fn nulls_last_renders_after_direction() {
        let query = SelectQuery::new(Driver::Postgres, "posts")
            .order_by_nulls_last("posts.title", Direction::Asc)
            .order_by_raw("posts.id ASC");
        assert_eq!(
            query.to_sql(),
            "SELECT posts.* FROM posts ORDER BY posts.title ASC NULLS LAST, posts.id ASC"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            SelectQuery::new(Driver::Postgres, "posts")
                .order_by("posts.title", Direction::Asc)
                .limit(5)
        };
        assert_eq!(build().render(), build().render());
    }
}

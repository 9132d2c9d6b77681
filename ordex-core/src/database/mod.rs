//! Execution layer: replay rendered queries through sqlx.
//!
//! Everything below the query AST is synchronous and pure; this module
//! is the single place where a statement meets a connection pool.

use crate::error::{QueryError, Result};
use crate::sql::{Part, SelectQuery, Value};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::error;

/// Replay a select's fragments through a fresh `sqlx::QueryBuilder`.
///
/// Raw parts are pushed as text; binds go through `push_bind` so sqlx
/// numbers the placeholders itself.
pub fn to_query_builder(query: &SelectQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("");
    for part in query.to_fragment().parts() {
        match part {
            Part::Raw(sql) => {
                builder.push(sql);
            }
            Part::Bind(value) => match value.clone() {
                Value::Bool(v) => {
                    builder.push_bind(v);
                }
                Value::Int(v) => {
                    builder.push_bind(v);
                }
                Value::Float(v) => {
                    builder.push_bind(v);
                }
                Value::Text(v) => {
                    builder.push_bind(v);
                }
                Value::Uuid(v) => {
                    builder.push_bind(v);
                }
                Value::Timestamp(v) => {
                    builder.push_bind(v);
                }
                Value::Null => {
                    builder.push("NULL");
                }
            },
        }
    }
    builder
}

/// Execute a compiled select and fetch every row.
pub async fn fetch_all(pool: &PgPool, query: &SelectQuery) -> Result<Vec<PgRow>> {
    let mut builder = to_query_builder(query);
    builder.build().fetch_all(pool).await.map_err(|e| {
        error!(error = %e, "list query failed");
        QueryError::Database(format!("query failed: {e}"))
    })
}

/// Execute a compiled select and fetch at most one row.
pub async fn fetch_optional(pool: &PgPool, query: &SelectQuery) -> Result<Option<PgRow>> {
    let mut builder = to_query_builder(query);
    builder.build().fetch_optional(pool).await.map_err(|e| {
        error!(error = %e, "list query failed");
        QueryError::Database(format!("query failed: {e}"))
    })
}

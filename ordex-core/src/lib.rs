//! # Ordex Core
//!
//! Relationship-aware list-query building: a small SQL select AST, a
//! sort dispatcher that understands entity relations, declarative
//! filters with relation-existence support, and pagination. Queries
//! render deterministically and execute (optionally) through sqlx.
//!
//! ## Overview
//!
//! Callers describe entities once as static [`ordex_model::EntityDef`]
//! descriptors: table, primary key, sortable columns, and declared
//! relations with explicit kinds. A [`query::ListQuery`] built against
//! a descriptor compiles into a [`sql::SelectQuery`] ready to render or
//! execute:
//!
//! ```
//! use ordex_core::config::QueryOptions;
//! use ordex_core::query::ListQuery;
//! use ordex_model::EntityDef;
//!
//! static POST: EntityDef = EntityDef {
//!     table: "posts",
//!     key: "id",
//!     sortable_columns: &["id", "title"],
//!     relations: &[],
//! };
//!
//! let query = ListQuery::builder()
//!     .like("title", "rust")
//!     .sort_by("title:desc")
//!     .build();
//!
//! let select = query.compile(&POST, &QueryOptions::default()).unwrap();
//! assert!(select.to_sql().contains("ORDER BY title DESC NULLS LAST"));
//! ```
//!
//! ## Feature Flags
//!
//! - `database`: Enables query execution against Postgres via sqlx
//!
//! ## Architecture
//!
//! - [`sql`]: select-statement AST, fragments, drivers, rendering
//! - [`query`]: filters, relationship-aware sorting, pagination
//! - [`config`]: host-loaded query settings
//! - [`database`]: sqlx execution layer (feature-gated)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod config;
/// Execution layer backed by sqlx (requires the `database` feature)
#[cfg(feature = "database")]
pub mod database;
pub mod error;
pub mod prelude;
pub mod query;
pub mod sql;

pub use error::{QueryError, Result};

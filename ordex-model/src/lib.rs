//! Schema metadata shared across ordex crates.
#![allow(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod direction;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod relation;

// Intentionally curated re-exports for downstream consumers.
pub use direction::Direction;
pub use entity::{Entity, EntityDef};
pub use error::{ModelError, Result as ModelResult};
pub use relation::{PivotDef, RelationDef, RelationKind};

//! Convenience re-exports for downstream crates.

pub use crate::direction::Direction;
pub use crate::entity::{Entity, EntityDef};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::relation::{PivotDef, RelationDef, RelationKind};

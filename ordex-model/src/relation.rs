use crate::entity::EntityDef;

/// Shape of an association between two entities.
///
/// Every relation a descriptor declares carries its kind explicitly;
/// nothing is discovered at runtime by inspecting model types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    /// Zero-or-one child row keyed by the parent
    HasOne,
    /// Many child rows keyed by the parent
    HasMany,
    /// Single owner row the entity points at
    BelongsTo,
    /// Many related rows through a pivot table
    BelongsToMany,
    /// Declared but not usable for ordering or existence checks
    None,
}

/// Declared association between two entity descriptors.
#[derive(Debug, Clone, Copy)]
pub struct RelationDef {
    pub kind: RelationKind,
    /// Descriptor of the related entity
    pub related: &'static EntityDef,
    /// `BelongsTo`: referencing column on the parent table.
    /// `HasOne`/`HasMany`: referencing column on the related table.
    /// Ignored for `BelongsToMany` (keys live on the pivot).
    pub foreign_key: &'static str,
    /// `BelongsTo`: owner key on the related table.
    /// `HasOne`/`HasMany`: local key on the parent table.
    /// Ignored for `BelongsToMany`.
    pub local_key: &'static str,
    /// Pivot table, `BelongsToMany` only.
    pub pivot: Option<PivotDef>,
}

impl RelationDef {
    /// Correlation predicate pairing the related table with the parent
    /// row, as qualified `(related side, parent side)` column names.
    ///
    /// Not meaningful for `BelongsToMany`; many-to-many correlation
    /// goes through [`PivotDef`].
    pub fn key_equation(&self, parent: &EntityDef) -> (String, String) {
        match self.kind {
            RelationKind::BelongsTo => (
                self.related.qualify(self.local_key),
                parent.qualify(self.foreign_key),
            ),
            _ => (
                self.related.qualify(self.foreign_key),
                parent.qualify(self.local_key),
            ),
        }
    }
}

/// Intermediate table implementing a many-to-many association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PivotDef {
    pub table: &'static str,
    /// Pivot column referencing the parent key
    pub parent_key: &'static str,
    /// Pivot column referencing the related key
    pub related_key: &'static str,
}

impl PivotDef {
    /// Column name prefixed with the pivot table.
    pub fn qualify(&self, column: &str) -> String {
        format!("{}.{}", self.table, column)
    }
}

use crate::error::{ModelError, Result};
use crate::relation::{RelationDef, RelationKind};

/// Static descriptor for a queryable entity.
///
/// Descriptors are plain data: a table, a primary key, the columns a
/// caller may sort or filter on, and the relations the entity declares.
/// They are usually defined once as `static` items and shared by
/// reference everywhere a query is built.
#[derive(Debug, Clone, Copy)]
pub struct EntityDef {
    /// Table backing the entity
    pub table: &'static str,
    /// Primary key column (unqualified)
    pub key: &'static str,
    /// Columns exposed for sorting and filtering
    pub sortable_columns: &'static [&'static str],
    /// Declared relations, looked up by name
    pub relations: &'static [(&'static str, RelationDef)],
}

impl EntityDef {
    /// Primary key prefixed with the owning table.
    pub fn qualified_key(&self) -> String {
        self.qualify(self.key)
    }

    /// Column name prefixed with the owning table.
    pub fn qualify(&self, column: &str) -> String {
        format!("{}.{}", self.table, column)
    }

    /// Whether `column` is exposed for sorting and filtering.
    pub fn is_sortable(&self, column: &str) -> bool {
        self.sortable_columns.contains(&column)
    }

    /// Look up a declared relation by name.
    pub fn relation(&self, name: &str) -> Option<&'static RelationDef> {
        self.relations
            .iter()
            .find(|(relation, _)| *relation == name)
            .map(|(_, def)| def)
    }

    /// Check the descriptor for configuration mistakes.
    ///
    /// Catches the errors that would otherwise only surface as broken
    /// SQL much later: empty identifiers and many-to-many relations
    /// with no pivot.
    pub fn validate(&self) -> Result<()> {
        if self.table.is_empty() || self.key.is_empty() {
            return Err(ModelError::InvalidEntity(format!(
                "descriptor for `{}` has an empty identifier",
                self.table
            )));
        }

        for (name, relation) in self.relations {
            if relation.kind == RelationKind::BelongsToMany && relation.pivot.is_none() {
                return Err(ModelError::InvalidRelation(format!(
                    "`{}.{}` is many-to-many but declares no pivot",
                    self.table, name
                )));
            }
            if relation.kind != RelationKind::BelongsToMany && relation.pivot.is_some() {
                return Err(ModelError::InvalidRelation(format!(
                    "`{}.{}` declares a pivot but is not many-to-many",
                    self.table, name
                )));
            }
        }

        Ok(())
    }
}

/// Hook for typed models to expose their descriptor.
pub trait Entity {
    /// The static descriptor for this entity type.
    fn def() -> &'static EntityDef;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::{PivotDef, RelationKind};

    static TAG: EntityDef = EntityDef {
        table: "tags",
        key: "id",
        sortable_columns: &["id", "label"],
        relations: &[],
    };

    static POST: EntityDef = EntityDef {
        table: "posts",
        key: "id",
        sortable_columns: &["id", "title"],
        relations: &[(
            "tags",
            RelationDef {
                kind: RelationKind::BelongsToMany,
                related: &TAG,
                foreign_key: "id",
                local_key: "id",
                pivot: Some(PivotDef {
                    table: "post_tag",
                    parent_key: "post_id",
                    related_key: "tag_id",
                }),
            },
        )],
    };

    #[test]
    fn qualification() {
        assert_eq!(POST.qualified_key(), "posts.id");
        assert_eq!(POST.qualify("title"), "posts.title");
    }

    #[test]
    fn relation_lookup() {
        assert!(POST.relation("tags").is_some());
        assert!(POST.relation("missing").is_none());
        assert!(POST.is_sortable("title"));
        assert!(!POST.is_sortable("secret"));
    }

    #[test]
    fn validate_accepts_well_formed_descriptors() {
        assert!(POST.validate().is_ok());
        assert!(TAG.validate().is_ok());
    }

    #[test]
    fn validate_rejects_pivotless_many_to_many() {
        static BROKEN: EntityDef = EntityDef {
            table: "posts",
            key: "id",
            sortable_columns: &[],
            relations: &[(
                "tags",
                RelationDef {
                    kind: RelationKind::BelongsToMany,
                    related: &TAG,
                    foreign_key: "id",
                    local_key: "id",
                    pivot: None,
                },
            )],
        };
        assert!(matches!(
            BROKEN.validate(),
            Err(ModelError::InvalidRelation(_))
        ));
    }
}

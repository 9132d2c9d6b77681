use crate::error::{QueryError, Result};
use ordex_model::Direction;

/// Parsed sort-field specifier.
///
/// A specifier is `column`, optionally prefixed with a relation name
/// (`relation.column`) and optionally suffixed with a direction
/// (`:desc`, case-insensitive; anything else reads as ascending). All
/// string slicing happens here, once, up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortField {
    relation: Option<String>,
    column: String,
    direction: Direction,
    path: String,
}

impl SortField {
    pub fn parse(field: &str) -> Result<Self> {
        let (path, direction) = match field.split_once(':') {
            Some((path, suffix)) if suffix.eq_ignore_ascii_case("desc") => (path, Direction::Desc),
            Some((path, _)) => (path, Direction::Asc),
            None => (field, Direction::Asc),
        };

        let (relation, column) = match path.split_once('.') {
            Some((relation, column)) => (Some(relation), column),
            None => (None, path),
        };

        if column.is_empty() {
            return Err(QueryError::FieldNotSupported(field.to_string()));
        }
        if let Some(relation) = relation
            && relation.is_empty()
        {
            return Err(QueryError::RelationshipNotSupported(field.to_string()));
        }

        Ok(Self {
            relation: relation.map(str::to_string),
            column: column.to_string(),
            direction,
            path: path.to_string(),
        })
    }

    /// Relation segment, when the specifier was dotted.
    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    /// Target column, direction suffix stripped.
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The dotted path as written, minus any direction suffix.
    pub fn path(&self) -> &str {
        &self.path
    }
}

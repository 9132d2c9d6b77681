use serde::{Deserialize, Serialize};

/// Database engine the generated SQL targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    #[default]
    Postgres,
    MySql,
    Sqlite,
}

impl Driver {
    /// Placeholder text for the `n`th bind (1-based).
    pub(crate) fn placeholder(&self, n: usize) -> String {
        match self {
            Driver::Postgres => format!("${n}"),
            Driver::MySql | Driver::Sqlite => "?".to_string(),
        }
    }

    /// Whether the engine accepts `NULLS LAST` in ORDER BY clauses.
    ///
    /// Only the Postgres family is special-cased; every other engine
    /// gets the portable boolean-expression fallback.
    pub fn supports_nulls_ordering(&self) -> bool {
        matches!(self, Driver::Postgres)
    }

    /// Whether the engine has a case-insensitive LIKE operator.
    pub fn supports_ilike(&self) -> bool {
        matches!(self, Driver::Postgres)
    }
}

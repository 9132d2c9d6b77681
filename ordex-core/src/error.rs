use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    /// The requested column is not among the target model's sortable
    /// columns. A caller-input problem; maps to a 4xx upstream.
    #[error("field not supported: {0}")]
    FieldNotSupported(String),

    /// The named relation is undeclared, has no usable kind, or is
    /// missing the metadata its kind requires. A configuration error.
    #[error("relationship not supported: {0}")]
    RelationshipNotSupported(String),

    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;

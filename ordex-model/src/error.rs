use std::fmt::{self, Display};

/// Errors produced by descriptor validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidEntity(String),
    InvalidRelation(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidEntity(msg) => write!(f, "invalid entity: {msg}"),
            ModelError::InvalidRelation(msg) => write!(f, "invalid relation: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;

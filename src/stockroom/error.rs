use crate::model::Category;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Product with ID {0} already exists")]
    DuplicateId(String),

    #[error("Product with ID {0} not found")]
    NotFound(String),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("{category} products have no {field} field")]
    FieldMismatch {
        field: &'static str,
        category: Category,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No products found in {0} category")]
    EmptyCategory(Category),

    #[error("Malformed row: {0}")]
    Row(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl StockError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StockError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        StockError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;

//! Error types for the catalog collection.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested book does not exist.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The book data provided is invalid.
    #[error("Invalid book: {0}")]
    InvalidBook(String),

    /// An error occurred while talking to the collection.
    #[error("Catalog store error: {0}")]
    Store(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::Store(msg)
    }
}

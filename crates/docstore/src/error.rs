//! # Store Errors
//!
//! Transport and lookup failures shared by every collection, plus a boxed
//! slot for domain errors raised inside document hooks. Centralizing these
//! keeps clients uniform: every operation fails with a `StoreError`, and a
//! domain client recovers its own error type through [`StoreError::document_error`].

/// Errors produced by the collection engine itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The collection task is gone; its channel is closed.
    #[error("Collection closed")]
    ChannelClosed,

    /// The collection dropped the reply channel without answering.
    #[error("Collection dropped response channel")]
    ResponseDropped,

    /// No document with the given id.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The id generator produced an id that is already stored. Inserts never
    /// overwrite; the caller sees the collision instead.
    #[error("Duplicate document id: {0}")]
    DuplicateId(String),

    /// A hook on the document rejected the operation.
    #[error("Document error: {0}")]
    DocumentError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Borrow the domain error carried by a `DocumentError`, if it is of
    /// type `E`. Returns `None` for every other variant or type.
    pub fn document_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::DocumentError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

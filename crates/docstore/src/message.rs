//! # Collection Messages
//!
//! The request enum a [`CollectionClient`](crate::CollectionClient) sends to
//! its [`CollectionActor`](crate::CollectionActor), and the oneshot reply
//! alias. One standardized set of document operations covers every
//! collection: insert, find, patch, remove, and a collection-level query.
//! The associated types of [`Document`] keep the payloads per-collection, so
//! an order insert cannot be addressed to the catalog.

use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Oneshot reply channel carried inside every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request against one collection.
#[derive(Debug)]
pub enum DocumentRequest<T: Document> {
    /// Store a new document built from the draft. Replies with the generated id.
    Insert {
        draft: T::Insert,
        respond_to: Response<T::Id>,
    },
    /// Fetch a document by id. Replies with `None` when absent.
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Apply a partial update. Replies with the updated document.
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    /// Remove a document by id.
    #[allow(dead_code)]
    Remove { id: T::Id, respond_to: Response<()> },
    /// Evaluate a collection-level query against the whole document map.
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
}

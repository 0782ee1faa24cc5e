//! # Collection Client
//!
//! The interface half of a collection. Holds only the sending end of the
//! request channel, so cloning is cheap and clones can live in as many tasks
//! as needed. Every method builds a request, attaches a oneshot reply
//! channel, and awaits the answer.

use crate::document::Document;
use crate::error::StoreError;
use crate::message::DocumentRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe async handle to one collection.
#[derive(Clone)]
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<DocumentRequest<T>>,
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<DocumentRequest<T>>) -> Self {
        Self { sender }
    }

    /// Insert a new document, returning its generated id.
    pub async fn insert(&self, draft: T::Insert) -> Result<T::Id, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DocumentRequest::Insert { draft, respond_to })
            .await
            .map_err(|_| StoreError::ChannelClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)?
    }

    /// Fetch a document by id.
    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DocumentRequest::FindById { id, respond_to })
            .await
            .map_err(|_| StoreError::ChannelClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)?
    }

    /// Apply a partial update, returning the updated document.
    pub async fn patch(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DocumentRequest::Patch {
                id,
                patch,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ChannelClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)?
    }

    /// Remove a document by id.
    #[allow(dead_code)]
    pub async fn remove(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DocumentRequest::Remove { id, respond_to })
            .await
            .map_err(|_| StoreError::ChannelClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)?
    }

    /// Evaluate a collection-level query.
    pub async fn query(&self, query: T::Query) -> Result<T::QueryResult, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DocumentRequest::Query { query, respond_to })
            .await
            .map_err(|_| StoreError::ChannelClosed)?;
        response.await.map_err(|_| StoreError::ResponseDropped)?
    }
}

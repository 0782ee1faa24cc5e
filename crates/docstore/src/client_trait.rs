//! # StoreClient Trait
//!
//! Shared plumbing for domain-specific client wrappers. A wrapper names its
//! error type, exposes its inner [`CollectionClient`], and says how engine
//! errors map into that type; `find_by_id` and `remove` then come for free.

use crate::{CollectionClient, Document, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit standard lookups.
///
/// # Example
///
/// ```rust,ignore
/// struct BookClient {
///     inner: CollectionClient<Book>,
/// }
///
/// #[async_trait]
/// impl StoreClient<Book> for BookClient {
///     type Error = BookError;
///
///     fn inner(&self) -> &CollectionClient<Book> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         BookError::Store(e.to_string())
///     }
/// }
///
/// // find_by_id() and remove() are provided automatically.
/// ```
#[async_trait]
pub trait StoreClient<T: Document>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map engine errors to the collection-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_by_id(id).await.map_err(Self::map_error)
    }

    /// Remove a document by id.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(id).await.map_err(Self::map_error)
    }
}

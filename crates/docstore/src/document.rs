//! # Document Trait
//!
//! The contract a type implements to be stored in a
//! [`CollectionActor`](crate::CollectionActor). Associated types pin down the id, the DTOs for
//! insert and patch, the collection-level query, the injected context, and
//! the error type, so a request for one collection can never be sent to
//! another: the compiler rejects it.
//!
//! Hooks with default bodies (`on_insert`, `on_remove`) only need overriding
//! when a document has real work to do at that point in its lifecycle.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for a document type managed by a collection.
///
/// The trait is `#[async_trait]` so hooks can await other collections through
/// the injected [`Document::Context`]. Context arrives at `run()` time, not at
/// construction, which lets collections be created in any order and wired
/// afterwards.
#[async_trait]
pub trait Document: Clone + Send + Sync + 'static {
    /// Unique identifier for this document (a string, an integer, a newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to insert a new document.
    type Insert: Send + Sync + Debug;

    /// The data required to patch an existing document.
    type Patch: Send + Sync + Debug;

    /// A collection-level read request (filter, search, aggregate).
    /// Use `()` for collections that answer no queries.
    type Query: Send + Sync + Debug;

    /// The result a query evaluates to.
    type QueryResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook.
    /// Use `()` when the collection needs none.
    type Context: Send + Sync;

    /// The domain error for this document type.
    ///
    /// One error enum covers the whole collection rather than one per
    /// operation. The enum is the union of everything that can go wrong,
    /// which costs a little precision per call site and saves a lot of
    /// boilerplate. Callers get a single type to match on.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the document from a freshly generated id and the insert DTO.
    /// Runs synchronously, before `on_insert`.
    fn from_insert(id: Self::Id, draft: Self::Insert) -> Result<Self, Self::Error>;

    /// Runs after construction and before the document is stored. A failure
    /// here means nothing is stored. Cross-collection validation belongs in
    /// this hook.
    async fn on_insert(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a patch to the document in place.
    async fn apply_patch(
        &mut self,
        patch: Self::Patch,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs immediately before the document is removed.
    async fn on_remove(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Evaluate a collection-level query against the full document map.
    ///
    /// Pure and synchronous: it sees a snapshot of the map and must not
    /// mutate. Ordering of results is the implementation's business since
    /// the map itself is unordered.
    fn evaluate_query(docs: &HashMap<Self::Id, Self>, query: Self::Query) -> Self::QueryResult;
}

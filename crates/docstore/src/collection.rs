//! # Collection Actor
//!
//! The server half of a collection. It owns the document map and the
//! receiving end of the request channel, and it processes requests one at a
//! time in its own task. Exclusive ownership of the map inside a single task
//! is the whole concurrency story: no `Mutex`, no `RwLock`, and no way for
//! two requests to interleave against the same collection.
//!
//! ## Id generation
//!
//! The actor does not impose an id scheme. The caller supplies a closure at
//! construction and the actor invokes it once per insert. A catalog can count
//! `book_1, book_2, ...` while an order collection mints timestamped random
//! ids, each without the engine knowing.
//!
//! ## Operation flow
//!
//! * **Insert**: generate id, `from_insert`, `on_insert` hook, store, reply
//!   with the id. A failure at any step stores nothing.
//! * **FindById**: clone out of the map, reply with `Option`.
//! * **Patch**: `apply_patch` hook against the stored document, reply with
//!   the updated copy. Missing id replies `NotFound`.
//! * **Remove**: `on_remove` hook, then drop from the map.
//! * **Query**: `evaluate_query` over the full map, synchronously.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::DocumentRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The task-owned server side of a collection.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<DocumentRequest<T>>,
    docs: HashMap<T::Id, T>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Document> CollectionActor<T> {
    /// Create a collection and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - capacity of the request channel. Senders wait when
    ///   it is full.
    /// * `next_id` - id generator invoked once per insert.
    ///
    /// The returned actor must be driven with [`CollectionActor::run`]; the
    /// client can be cloned freely and handed to anyone who needs the
    /// collection.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            docs: HashMap::new(),
            next_id: Box::new(next_id),
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Run the request loop until every client is dropped.
    ///
    /// `context` is handed to every document hook. Collections that validate
    /// against other collections receive those clients here, after all actors
    /// exist, which is what makes the wiring order a non-problem.
    pub async fn run(mut self, context: T::Context) {
        // Short type name only; the full path is noise in log lines.
        let collection = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(collection, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DocumentRequest::Insert { draft, respond_to } => {
                    debug!(collection, ?draft, "Insert");
                    let id = (self.next_id)();
                    if self.docs.contains_key(&id) {
                        warn!(collection, %id, "Id generator produced a duplicate");
                        let _ = respond_to.send(Err(StoreError::DuplicateId(id.to_string())));
                        continue;
                    }

                    match T::from_insert(id.clone(), draft) {
                        Ok(mut doc) => {
                            if let Err(e) = doc.on_insert(&context).await {
                                warn!(collection, error = %e, "on_insert rejected");
                                let _ =
                                    respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                                continue;
                            }
                            self.docs.insert(id.clone(), doc);
                            info!(collection, %id, size = self.docs.len(), "Inserted");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(collection, error = %e, "Insert failed");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        }
                    }
                }
                DocumentRequest::FindById { id, respond_to } => {
                    let doc = self.docs.get(&id).cloned();
                    let found = doc.is_some();
                    debug!(collection, %id, found, "FindById");
                    let _ = respond_to.send(Ok(doc));
                }
                DocumentRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(collection, %id, ?patch, "Patch");
                    if let Some(doc) = self.docs.get_mut(&id) {
                        if let Err(e) = doc.apply_patch(patch, &context).await {
                            warn!(collection, %id, error = %e, "Patch rejected");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                            continue;
                        }
                        info!(collection, %id, "Patched");
                        let _ = respond_to.send(Ok(doc.clone()));
                    } else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                DocumentRequest::Remove { id, respond_to } => {
                    debug!(collection, %id, "Remove");
                    if let Some(doc) = self.docs.get(&id) {
                        if let Err(e) = doc.on_remove(&context).await {
                            warn!(collection, %id, error = %e, "on_remove rejected");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                            continue;
                        }
                        self.docs.remove(&id);
                        info!(collection, %id, size = self.docs.len(), "Removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                DocumentRequest::Query { query, respond_to } => {
                    debug!(collection, ?query, "Query");
                    let result = T::evaluate_query(&self.docs, query);
                    let _ = respond_to.send(Ok(result));
                }
            }
        }

        info!(collection, size = self.docs.len(), "Shutdown");
    }
}

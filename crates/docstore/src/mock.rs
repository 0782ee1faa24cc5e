//! # Mock Collections
//!
//! [`MockCollection`] answers the same client API as a real collection but
//! from an in-memory expectation queue, so logic layered on top of a
//! [`CollectionClient`] can be tested without spawning a collection task.
//! Expectations are consumed in order; [`MockCollection::verify`] panics if
//! any are left over.
//!
//! A mock is the right tool for testing the code *around* a client: it is
//! deterministic, instant, and can inject failures (a closed channel, a
//! missing document) that are awkward to reproduce with a live collection.
//! Testing the document hooks themselves still wants a real
//! [`CollectionActor`](crate::CollectionActor).
//!
//! ```rust,ignore
//! let mut mock = MockCollection::<Book>::new();
//! mock.expect_find(book_id.clone()).return_ok(Some(book));
//! mock.expect_insert().return_err(StoreError::ChannelClosed);
//!
//! let client = mock.client();
//! // drive the code under test with `client` ...
//! mock.verify();
//! ```
//!
//! For assertions about the request payloads themselves, the raw helpers
//! ([`mock_collection`], [`take_insert`], [`take_find`], [`take_query`])
//! expose the channel directly: the test receives each request and answers
//! it by hand.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::DocumentRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One queued canned response.
#[allow(dead_code)] // ids are kept for diagnostics, not matched yet
enum Expectation<T: Document> {
    Insert {
        response: Result<T::Id, StoreError>,
    },
    Find {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Query {
        response: Result<T::QueryResult, StoreError>,
    },
}

/// A mock collection with fluent expectation tracking.
pub struct MockCollection<T: Document> {
    client: CollectionClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockCollection<T> {
    /// Create a mock with an empty expectation queue.
    ///
    /// Must be called from within a Tokio runtime; the mock spawns a small
    /// task that answers requests from the queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<DocumentRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut q = queue.lock().unwrap();
                    q.pop_front()
                };

                match (request, expectation) {
                    (
                        DocumentRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        DocumentRequest::FindById { respond_to, .. },
                        Some(Expectation::Find { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        DocumentRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("MockCollection: request did not match the next expectation");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    /// Queue an expectation for the next `insert`.
    pub fn expect_insert(&mut self) -> InsertExpectation<T> {
        InsertExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Queue an expectation for the next `find_by_id` of `id`.
    pub fn expect_find(&mut self, id: T::Id) -> FindExpectation<T> {
        FindExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Queue an expectation for the next `query`.
    pub fn expect_query(&mut self) -> QueryExpectation<T> {
        QueryExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Panic unless every queued expectation was consumed.
    pub fn verify(&self) {
        let q = self.expectations.lock().unwrap();
        if !q.is_empty() {
            panic!("MockCollection: {} expectation(s) never consumed", q.len());
        }
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectation<T: Document> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> InsertExpectation<T> {
    pub fn return_ok(self, id: T::Id) {
        let mut q = self.expectations.lock().unwrap();
        q.push_back(Expectation::Insert { response: Ok(id) });
    }

    pub fn return_err(self, error: StoreError) {
        let mut q = self.expectations.lock().unwrap();
        q.push_back(Expectation::Insert {
            response: Err(error),
        });
    }
}

/// Builder for `find_by_id` expectations.
pub struct FindExpectation<T: Document> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> FindExpectation<T> {
    pub fn return_ok(self, doc: Option<T>) {
        let mut q = self.expectations.lock().unwrap();
        q.push_back(Expectation::Find {
            id: self.id,
            response: Ok(doc),
        });
    }

    pub fn return_err(self, error: StoreError) {
        let mut q = self.expectations.lock().unwrap();
        q.push_back(Expectation::Find {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectation<T: Document> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> QueryExpectation<T> {
    pub fn return_ok(self, result: T::QueryResult) {
        let mut q = self.expectations.lock().unwrap();
        q.push_back(Expectation::Query {
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: StoreError) {
        let mut q = self.expectations.lock().unwrap();
        q.push_back(Expectation::Query {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// A client whose requests land on a receiver the test controls.
///
/// Where [`MockCollection`] answers blindly from a queue, this form lets the
/// test inspect each request's payload before replying, at the cost of more
/// ceremony.
pub fn mock_collection<T: Document>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<DocumentRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Await the next request and unwrap it as an Insert.
pub async fn take_insert<T: Document>(
    receiver: &mut mpsc::Receiver<DocumentRequest<T>>,
) -> Option<(
    T::Insert,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(DocumentRequest::Insert { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Await the next request and unwrap it as a FindById.
pub async fn take_find<T: Document>(
    receiver: &mut mpsc::Receiver<DocumentRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(DocumentRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Await the next request and unwrap it as a Query.
pub async fn take_query<T: Document>(
    receiver: &mut mpsc::Receiver<DocumentRequest<T>>,
) -> Option<(
    T::Query,
    tokio::sync::oneshot::Sender<Result<T::QueryResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(DocumentRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

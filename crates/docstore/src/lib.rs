//! # docstore
//!
//! A small, typed document-collection engine built on Tokio message passing.
//!
//! Each collection is owned by a single task (a "collection actor") that holds
//! the document map exclusively and processes requests sequentially. That gives
//! every collection per-document atomicity without locks: a request either
//! completes against the map or it doesn't, and no two requests interleave.
//!
//! ## The three layers
//!
//! 1. **[`Document`]** - the contract a stored type implements: id, insert and
//!    patch DTOs, a collection-level query, lifecycle hooks, and an error type.
//! 2. **[`CollectionActor`]** - the server half. Owns the `HashMap<Id, Doc>`,
//!    generates ids through an injected closure, and runs the request loop.
//! 3. **[`CollectionClient`]** - the interface half. Cheap to clone, forwards
//!    requests over an mpsc channel and awaits oneshot replies.
//!
//! ## Validation lives in hooks
//!
//! `on_insert` runs after construction but before the document is stored, with
//! an injected `Context` (typically clients of other collections). If the hook
//! fails, nothing is stored. This is where cross-collection checks belong:
//! a document that validates against another collection's current state does
//! so here, and the insert is all-or-nothing.
//!
//! ## Context injection
//!
//! Dependencies are passed to `run(context)`, not to the constructor. Create
//! every collection first, then start each task with the clients it needs.
//! This late binding keeps construction free of ordering problems.
//!
//! ```rust
//! use docstore::{CollectionActor, Document};
//! use async_trait::async_trait;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, body: String }
//!
//! #[derive(Debug)] struct NoteDraft { body: String }
//! #[derive(Debug)] struct NotePatch { body: Option<String> }
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! #[async_trait]
//! impl Document for Note {
//!     type Id = u32;
//!     type Insert = NoteDraft;
//!     type Patch = NotePatch;
//!     type Query = ();
//!     type QueryResult = usize;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_insert(id: u32, draft: NoteDraft) -> Result<Self, NoteError> {
//!         Ok(Self { id, body: draft.body })
//!     }
//!
//!     async fn apply_patch(&mut self, patch: NotePatch, _ctx: &()) -> Result<(), NoteError> {
//!         if let Some(body) = patch.body { self.body = body; }
//!         Ok(())
//!     }
//!
//!     fn evaluate_query(docs: &HashMap<u32, Self>, _query: ()) -> usize {
//!         docs.len()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let seq = Arc::new(AtomicU32::new(1));
//!     let (actor, client) =
//!         CollectionActor::<Note>::new(8, move || seq.fetch_add(1, Ordering::SeqCst));
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.insert(NoteDraft { body: "first".into() }).await.unwrap();
//!     let note = client.find_by_id(id).await.unwrap().unwrap();
//!     assert_eq!(note.body, "first");
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockCollection`] implements the same client API entirely in memory
//! with an expectation queue, so logic layered on top of a client can be
//! tested without spawning any collection task. See the [`mock`] module.

pub mod client;
pub mod client_trait;
pub mod collection;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use client::CollectionClient;
pub use client_trait::StoreClient;
pub use collection::CollectionActor;
pub use document::Document;
pub use error::StoreError;
pub use message::{DocumentRequest, Response};

//! # Catalog Collection
//!
//! The book catalog as a document collection. Seeding inserts books, order
//! validation resolves them by id, and the browse surface runs the typed
//! queries in [`query`]: filtered listings, substring search, and the
//! distinct classification list.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](docstore::Document) implementation for
//!   [`Book`](crate::model::Book)
//! - [`query`] - query and result types plus their pure evaluation
//! - [`error`] - [`CatalogError`] for type-safe error handling
//! - [`new()`] - factory that creates the collection and its generic client

pub mod entity;
pub mod error;
pub mod query;

pub use error::*;
pub use query::*;

use crate::model::{Book, BookId};
use docstore::{CollectionActor, CollectionClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates the catalog collection and its client.
///
/// Ids count up as `book_1`, `book_2`, and so on.
pub fn new() -> (CollectionActor<Book>, CollectionClient<Book>) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_book_id = move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        BookId(format!("book_{id}"))
    };
    CollectionActor::new(32, next_book_id)
}

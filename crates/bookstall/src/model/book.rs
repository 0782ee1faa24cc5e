/// Catalog book and the DTOs that create, patch, and snapshot it.
///
/// # Document Store
/// [`Book`] implements the [`Document`](docstore::Document) trait (see the
/// catalog module), so the catalog is an ordinary collection: inserts for
/// seeding, lookups during order validation, and collection-level queries
/// for browsing.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalog books.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub String);

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl BookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub publisher: String,
    /// URL or path of the cover image.
    pub image: String,
    pub price: f64,
    /// Optional classification used for catalog filtering.
    pub class: Option<String>,
}

/// Payload for adding a book to the catalog.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub title: String,
    pub publisher: String,
    pub image: String,
    pub price: f64,
    pub class: Option<String>,
}

/// Partial update for an existing book.
#[derive(Debug, Clone)]
pub struct BookPatch {
    pub price: Option<f64>,
    pub image: Option<String>,
}

/// The reduced projection of a book that a cart persists.
///
/// Every field is serde-defaulted on purpose: blobs written by an older
/// schema still deserialize, possibly with an empty id, and the cart's
/// rehydration cleanup then removes entries that cannot be resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub class: Option<String>,
}

impl BookSnapshot {
    /// A snapshot is resolvable when it still carries a usable book id.
    pub fn resolvable(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

impl From<&Book> for BookSnapshot {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0.clone(),
            title: book.title.clone(),
            publisher: book.publisher.clone(),
            image: book.image.clone(),
            price: book.price,
            class: book.class.clone(),
        }
    }
}

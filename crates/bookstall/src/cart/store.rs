//! # Cart Store
//!
//! The session's shopping cart: an insertion-ordered list of book snapshots
//! with quantities, plus two derived totals that are recomputed on every
//! mutation and never stored. Each mutation persists a reduced blob
//! (`{items: [{item, quantity}]}`) under a versioned key; the totals are
//! always rebuilt from the items on load so stored totals can never drift
//! from stored contents.
//!
//! ## Rehydration
//!
//! Loading is two explicit phases. Phase one deserializes the blob or falls
//! back to empty: a missing key, an unreadable backend, or malformed JSON
//! all mean "no cart", never an error. Phase two, [`CartStore::cleanup`],
//! drops any entry whose snapshot lost its book id (schema drift, partial
//! corruption) and re-persists if it removed anything. Running cleanup again
//! changes nothing.
//!
//! Bumping [`CART_KEY`] abandons older incompatible blobs instead of
//! migrating them; an old key is simply never read again.
//!
//! ## Consistency
//!
//! One cart store per session. Several handles over the same storage key
//! converge by last write wins; that weak consistency is accepted, not
//! worked around.

use crate::cart::storage::CartStorage;
use crate::model::BookSnapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Versioned storage key. Bump the suffix when the blob layout changes
/// incompatibly.
pub const CART_KEY: &str = "bookstall.cart.v2";

/// One cart entry: a persisted book snapshot and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "item")]
    pub book: BookSnapshot,
    pub quantity: u32,
}

/// The persisted projection. Items only; totals are derived state.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CartBlob {
    #[serde(default)]
    items: Vec<CartItem>,
}

/// In-memory cart with write-through persistence.
pub struct CartStore<S: CartStorage> {
    items: Vec<CartItem>,
    total_items: u32,
    total_price: f64,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// An empty cart over the given storage. Does not read existing state.
    pub fn new(storage: S) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: 0.0,
            storage,
        }
    }

    /// Rehydrate from storage: deserialize-or-default, then self-heal.
    pub fn restore(storage: S) -> Self {
        let mut store = Self {
            items: Self::read_blob(&storage),
            total_items: 0,
            total_price: 0.0,
            storage,
        };
        store.recompute();
        store.cleanup();
        store
    }

    /// Phase one of rehydration. Anything unreadable is an empty cart.
    fn read_blob(storage: &S) -> Vec<CartItem> {
        match storage.read(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<CartBlob>(&raw) {
                Ok(blob) => blob.items,
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable cart blob");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Cart storage unavailable, starting empty");
                Vec::new()
            }
        }
    }

    /// Phase two of rehydration: drop entries without a resolvable book id,
    /// then recompute and re-persist if anything was dropped. Idempotent.
    /// Returns how many entries were removed.
    pub fn cleanup(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|entry| entry.book.resolvable());
        let dropped = before - self.items.len();
        if dropped > 0 {
            warn!(dropped, "Removed cart entries without a resolvable book id");
            self.recompute();
            self.persist();
        }
        dropped
    }

    /// Add `quantity` of a book. Adding a book already in the cart merges
    /// quantities; a snapshot without an id is ignored with a log line.
    pub fn add_item(&mut self, book: BookSnapshot, quantity: u32) {
        if !book.resolvable() {
            warn!(title = %book.title, "Ignoring cart add for a book without an id");
            return;
        }
        if quantity == 0 {
            debug!(book_id = %book.id, "Ignoring cart add with zero quantity");
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|e| e.book.id == book.id) {
            existing.quantity += quantity;
        } else {
            self.items.push(CartItem { book, quantity });
        }
        self.recompute();
        self.persist();
    }

    /// Remove a book entirely. Absent ids are a logged no-op.
    pub fn remove_item(&mut self, book_id: &str) {
        let before = self.items.len();
        self.items.retain(|e| e.book.id != book_id);
        if self.items.len() == before {
            debug!(book_id, "remove_item: book not in cart");
            return;
        }
        self.recompute();
        self.persist();
    }

    /// Set a book's quantity to exactly `quantity`. Zero removes the entry.
    pub fn update_quantity(&mut self, book_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(book_id);
            return;
        }
        match self.items.iter_mut().find(|e| e.book.id == book_id) {
            Some(entry) => {
                entry.quantity = quantity;
                self.recompute();
                self.persist();
            }
            None => debug!(book_id, "update_quantity: book not in cart"),
        }
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
        self.persist();
    }

    pub fn get_item(&self, book_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|e| e.book.id == book_id)
    }

    pub fn contains(&self, book_id: &str) -> bool {
        self.get_item(book_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    fn recompute(&mut self) {
        self.total_items = self.items.iter().map(|e| e.quantity).sum();
        self.total_price = self
            .items
            .iter()
            .map(|e| e.book.price * f64::from(e.quantity))
            .sum();
    }

    /// Write-through. A failed write keeps the in-memory cart intact and is
    /// only logged; the next successful persist catches storage up.
    fn persist(&mut self) {
        let blob = CartBlob {
            items: self.items.clone(),
        };
        match serde_json::to_string(&blob) {
            Ok(raw) => {
                if let Err(e) = self.storage.write(CART_KEY, &raw) {
                    warn!(error = %e, "Cart persistence failed, keeping in-memory state");
                }
            }
            Err(e) => warn!(error = %e, "Cart serialization failed"),
        }
    }
}

//! # Shopping Cart
//!
//! The client-held half of the system: an explicitly constructed cart store
//! owned by the session (never a global), persisting through a pluggable
//! storage backend and healing itself on rehydration.
//!
//! - [`store`] - the [`CartStore`] state machine and its derived totals
//! - [`storage`] - the [`CartStorage`] key-value seam with memory and
//!   JSON-file backends

pub mod storage;
pub mod store;

pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::{CartItem, CartStore, CART_KEY};

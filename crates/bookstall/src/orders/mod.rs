//! # Orders Collection
//!
//! Order creation is the one write path in the system with a real invariant:
//! the persisted total must equal the sum of the line snapshots, and the
//! snapshots must be priced from the server's catalog, never from the
//! client. The [`Document`](docstore::Document) implementation in [`entity`]
//! enforces both before anything is stored.
//!
//! ## Structure
//!
//! - [`entity`] - `Document` implementation for [`Order`], including the
//!   price-revalidation hook
//! - [`error`] - [`OrderError`] with the offending values carried in each
//!   rejection
//! - [`new()`] - factory wiring the id scheme for orders
//!
//! ## Id scheme
//!
//! `ORD-<unix millis>-<6 random hex>`: a monotonic-ish timestamp component
//! plus a random suffix, unique with overwhelming probability. Collisions
//! are still checked at insert and reported rather than overwritten.

pub mod entity;
pub mod error;

pub use entity::MAX_NOTES_LEN;
pub use error::*;

use crate::model::{Order, OrderId};
use chrono::Utc;
use docstore::{CollectionActor, CollectionClient};
use uuid::Uuid;

/// Absolute tolerance when comparing a claimed order total against the
/// server-calculated one.
pub const PRICE_TOLERANCE: f64 = 0.01;

/// Creates the orders collection and its generic client.
pub fn new() -> (CollectionActor<Order>, CollectionClient<Order>) {
    CollectionActor::new(32, next_order_id)
}

fn next_order_id() -> OrderId {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    OrderId(format!("ORD-{}-{}", millis, &suffix[..6]))
}

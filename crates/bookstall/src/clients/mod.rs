//! Domain-specific clients wrapping the generic collection clients.
//!
//! The rest of the application never touches raw collection messages; it
//! goes through these wrappers, which add typed methods, error mapping, and
//! tracing.

pub mod catalog_client;
pub mod orders_client;

pub use catalog_client::CatalogClient;
pub use orders_client::OrdersClient;

//! # System Lifecycle
//!
//! [`Bookstall`] is the orchestrator: it creates both collections, wires the
//! orders collection's context with a catalog client clone, installs the
//! default notification hooks, and coordinates shutdown.
//!
//! ## Wiring order
//!
//! Collections are created first, with no dependencies; dependencies are
//! injected when each actor's `run()` starts. The orders collection receives
//! a [`CatalogClient`] as its context so order validation can resolve books.
//! The dependency graph is acyclic (orders reads catalog, nothing reads
//! orders), so dropping the public clients is enough to shut everything
//! down: the orders actor exits when its channel closes, its context drops
//! the last catalog sender, and the catalog actor follows.

use crate::catalog;
use crate::clients::{CatalogClient, OrdersClient};
use crate::notify::Notifier;
use crate::orders;
use std::sync::Arc;
use tracing::{error, info};

/// The running system: both collections plus their public clients.
pub struct Bookstall {
    /// Client for the book catalog.
    pub catalog: CatalogClient,
    /// Client for order placement and lookup.
    pub orders: OrdersClient,
    /// Task handles for the collection actors, awaited at shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Bookstall {
    /// Start both collections with the default notification hooks.
    pub fn new() -> Self {
        Self::with_notifier(Notifier::with_default_hooks())
    }

    /// Start both collections with a caller-supplied notifier.
    pub fn with_notifier(notifier: Notifier) -> Self {
        // 1. Create collections (no dependencies yet).
        let (catalog_actor, catalog_generic) = catalog::new();
        let (orders_actor, orders_generic) = orders::new();

        let catalog = CatalogClient::new(catalog_generic);
        let orders = OrdersClient::new(orders_generic, Arc::new(notifier));

        // 2. Start actors with injected context. The catalog stands alone;
        //    the orders collection validates against it.
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let orders_handle = tokio::spawn(orders_actor.run(catalog.clone()));

        Self {
            catalog,
            orders,
            handles: vec![catalog_handle, orders_handle],
        }
    }

    /// Drop the clients, then wait for both actors to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down bookstall...");

        drop(self.catalog);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection task failed: {e:?}");
                return Err(format!("Collection task failed: {e:?}"));
            }
        }

        info!("Bookstall shutdown complete.");
        Ok(())
    }
}

impl Default for Bookstall {
    fn default() -> Self {
        Self::new()
    }
}

//! # HTTP API
//!
//! The REST boundary over the two collections. Success bodies are enveloped
//! as `{success: true, data}`, catalog listings add `pagination`, and
//! failures render as `{success: false, error, message?, details?}` with a
//! status code matching the failure class.
//!
//! ## Routes
//!
//! - `GET  /api/books` - filtered, sorted, paginated listing
//! - `GET  /api/books/search?q=` - substring search
//! - `GET  /api/books/classes` - distinct classification list
//! - `GET  /api/books/:id` - single book
//! - `POST /api/orders` - place an order (price-revalidated server-side)
//! - `GET  /api/orders/:id` - fetch a persisted order

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod orders;

pub use envelope::{ApiResponse, PagedResponse};
pub use error::HttpError;

use crate::clients::{CatalogClient, OrdersClient};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared handler state: one client per collection.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub orders: OrdersClient,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/books", get(catalog::list_books))
        .route("/api/books/search", get(catalog::search_books))
        .route("/api/books/classes", get(catalog::list_classes))
        .route("/api/books/:id", get(catalog::get_book))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/:id", get(orders::get_order))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

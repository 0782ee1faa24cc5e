//! [`Document`] implementation for [`Order`]: the price-revalidating order
//! creation path.
//!
//! `from_insert` does the synchronous shape checks; `on_insert` is the
//! critical section. It resolves every requested book against the catalog
//! through the injected [`CatalogClient`], rebuilds the line items from the
//! server's current prices, and compares the recomputed total against the
//! client's claimed total. Any failure means the order is never stored.
//!
//! The catalog lookup and the store of the order are two separate channel
//! round trips, so a price change can slip between them. That window is
//! accepted: the order snapshots whatever the catalog said at lookup time,
//! and historical orders are isolated from later price changes either way.

use super::error::OrderError;
use super::PRICE_TOLERANCE;
use crate::clients::CatalogClient;
use crate::model::{Order, OrderId, OrderLine, OrderRequest, OrderStatus, PaymentStatus};
use async_trait::async_trait;
use chrono::Utc;
use docstore::{Document, StoreClient};
use std::collections::HashMap;

/// Longest accepted order notes, enforced at insert.
pub const MAX_NOTES_LEN: usize = 500;

#[async_trait]
impl Document for Order {
    type Id = OrderId;
    type Insert = OrderRequest;
    type Patch = ();
    type Query = ();
    type QueryResult = ();
    type Context = CatalogClient;
    type Error = OrderError;

    /// Shape checks plus skeleton construction. Lines start as id/quantity
    /// placeholders; `on_insert` replaces them with the catalog snapshot.
    fn from_insert(id: OrderId, request: OrderRequest) -> Result<Self, Self::Error> {
        if request.items.is_empty() {
            return Err(OrderError::Empty);
        }
        if !request.total_price.is_finite() || request.total_price <= 0.0 {
            return Err(OrderError::InvalidTotal(request.total_price));
        }
        if let Some(item) = request.items.iter().find(|i| i.quantity == 0) {
            return Err(OrderError::InvalidQuantity {
                book_id: item.book_id.clone(),
            });
        }
        if let Some(notes) = &request.notes {
            if notes.chars().count() > MAX_NOTES_LEN {
                return Err(OrderError::Validation(format!(
                    "notes must be at most {MAX_NOTES_LEN} characters"
                )));
            }
        }

        let now = Utc::now();
        let lines = request
            .items
            .into_iter()
            .map(|item| OrderLine {
                book_id: item.book_id,
                title: String::new(),
                publisher: String::new(),
                image: String::new(),
                price: 0.0,
                quantity: item.quantity,
            })
            .collect();

        Ok(Self {
            id,
            customer: request.customer,
            lines,
            // Claimed total; replaced by the calculated total in on_insert.
            total_price: request.total_price,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// The integrity check. Resolves each line against the catalog, snapshots
    /// server values, recomputes the total, and rejects on divergence beyond
    /// [`PRICE_TOLERANCE`]. Client-supplied prices never reach the snapshot;
    /// the request does not even carry them.
    async fn on_insert(&mut self, catalog: &CatalogClient) -> Result<(), Self::Error> {
        let mut lines = Vec::with_capacity(self.lines.len());
        for requested in &self.lines {
            let book = catalog
                .find_by_id(crate::model::BookId(requested.book_id.clone()))
                .await
                .map_err(|e| OrderError::Store(e.to_string()))?
                .ok_or_else(|| OrderError::BookNotFound(requested.book_id.clone()))?;

            lines.push(OrderLine {
                book_id: book.id.0,
                title: book.title,
                publisher: book.publisher,
                image: book.image,
                price: book.price,
                quantity: requested.quantity,
            });
        }

        let calculated: f64 = lines.iter().map(OrderLine::line_total).sum();
        let claimed = self.total_price;
        if (calculated - claimed).abs() > PRICE_TOLERANCE {
            return Err(OrderError::TotalMismatch {
                claimed,
                calculated,
            });
        }

        self.lines = lines;
        self.total_price = calculated;
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn apply_patch(&mut self, _patch: (), _ctx: &CatalogClient) -> Result<(), Self::Error> {
        // Status transitions are modeled on Order but not wired to any
        // operation; see Order::apply_status.
        Ok(())
    }

    fn evaluate_query(_docs: &HashMap<OrderId, Self>, _query: ()) {}
}

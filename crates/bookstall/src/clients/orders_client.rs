//! # Orders Client
//!
//! The server-side entry point for order placement. Validation and the
//! price-integrity check happen inside the orders collection (in the order's
//! insert hooks); this client sequences the call, fetches the canonical
//! persisted record, and then runs the post-commit notification hooks.
//! Notifications run strictly after persistence and their failures are
//! logged and swallowed by the [`Notifier`].

use crate::model::{Order, OrderId, OrderRequest};
use crate::notify::Notifier;
use crate::orders::OrderError;
use async_trait::async_trait;
use docstore::{CollectionClient, StoreClient, StoreError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the orders collection.
#[derive(Clone)]
pub struct OrdersClient {
    inner: CollectionClient<Order>,
    notifier: Arc<Notifier>,
}

impl OrdersClient {
    pub fn new(inner: CollectionClient<Order>, notifier: Arc<Notifier>) -> Self {
        Self { inner, notifier }
    }

    /// Place an order: insert (which runs every integrity check), read back
    /// the canonical record, fire the post-commit hooks, return the record.
    ///
    /// A rejection from the collection arrives as the original
    /// [`OrderError`], recovered from the boxed document error.
    #[instrument(skip(self, request))]
    pub async fn place_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        debug!(items = request.items.len(), claimed = request.total_price, "place_order called");

        let id = self.inner.insert(request).await.map_err(Self::map_error)?;

        let order = self
            .inner
            .find_by_id(id.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| OrderError::Store(format!("order {id} missing after insert")))?;

        info!(order_id = %order.id, total = order.total_price, "Order persisted");

        // Post-commit only. Hook failures are logged inside the notifier and
        // never affect the returned result.
        self.notifier.order_placed(&order).await;

        Ok(order)
    }

    /// Fetch a persisted order by id.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.find_by_id(id).await
    }
}

#[async_trait]
impl StoreClient<Order> for OrdersClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        if let Some(domain) = e.document_error::<OrderError>() {
            return domain.clone();
        }
        match e {
            StoreError::DuplicateId(id) => OrderError::DuplicateId(id),
            other => OrderError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerInfo, OrderItemRequest};
    use docstore::mock::{mock_collection, take_insert};

    fn request() -> OrderRequest {
        OrderRequest {
            customer: CustomerInfo {
                name: "Alice".to_string(),
                organization: None,
                phone: "+1 555 123 4567".to_string(),
                email: "alice@example.com".to_string(),
                address: "1 Long Street, Springfield".to_string(),
            },
            items: vec![OrderItemRequest {
                book_id: "book_1".to_string(),
                quantity: 2,
            }],
            total_price: 25.98,
            notes: None,
        }
    }

    #[tokio::test]
    async fn a_rejected_insert_surfaces_the_domain_error() {
        let (client, mut receiver) = mock_collection::<Order>(10);
        let orders = OrdersClient::new(client, Arc::new(Notifier::new()));

        let task = tokio::spawn(async move { orders.place_order(request()).await });

        let (_draft, responder) = take_insert(&mut receiver).await.expect("expected an insert");
        responder
            .send(Err(StoreError::DocumentError(Box::new(
                OrderError::TotalMismatch {
                    claimed: 25.98,
                    calculated: 30.00,
                },
            ))))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(
            result,
            Err(OrderError::TotalMismatch {
                claimed: 25.98,
                calculated: 30.00,
            })
        );
    }

    #[tokio::test]
    async fn a_closed_collection_surfaces_as_a_store_error() {
        let (client, mut receiver) = mock_collection::<Order>(10);
        let orders = OrdersClient::new(client, Arc::new(Notifier::new()));

        let task = tokio::spawn(async move { orders.place_order(request()).await });

        let (_draft, responder) = take_insert(&mut receiver).await.expect("expected an insert");
        responder.send(Err(StoreError::ChannelClosed)).unwrap();

        let result = task.await.unwrap();
        assert!(matches!(result, Err(OrderError::Store(_))));
    }

    #[tokio::test]
    async fn duplicate_ids_map_to_their_own_variant() {
        let (client, mut receiver) = mock_collection::<Order>(10);
        let orders = OrdersClient::new(client, Arc::new(Notifier::new()));

        let task = tokio::spawn(async move { orders.place_order(request()).await });

        let (_draft, responder) = take_insert(&mut receiver).await.expect("expected an insert");
        responder
            .send(Err(StoreError::DuplicateId("ORD-1-abc".to_string())))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(OrderError::DuplicateId("ORD-1-abc".to_string())));
    }
}

//! # Order Submission
//!
//! The client half of the order protocol: turn the cart into an
//! [`OrderRequest`] (ids and quantities only, prices stay home), gate it on
//! field validation, send it through an [`OrderGateway`] under a timeout,
//! and handle the three outcomes distinctly.
//!
//! - **Success**: the cart is cleared and the canonical server order is
//!   returned. Clearing happens only here, never speculatively.
//! - **Rejection**: the server said no (integrity mismatch, unknown book).
//!   The cart is untouched so the user can adjust and retry.
//! - **Transport failure**: timeout or a dead channel. Also leaves the cart
//!   untouched. There is no idempotency key, so a retry after a timeout
//!   that actually succeeded server-side can create a duplicate order; that
//!   gap is known and documented rather than papered over.

use crate::cart::{CartStorage, CartStore};
use crate::checkout::validate::{validate_customer, FieldError};
use crate::model::{CustomerInfo, Order, OrderItemRequest, OrderRequest};
use crate::orders::OrderError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{error, info, warn};

/// Where submissions go. The in-process implementation lives on
/// `OrdersClient`; an HTTP client would implement the same trait.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place_order(&self, request: OrderRequest) -> Result<Order, OrderError>;
}

#[async_trait]
impl OrderGateway for crate::clients::OrdersClient {
    async fn place_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        crate::clients::OrdersClient::place_order(self, request).await
    }
}

/// Why a submission did not produce an order.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Field validation failed; nothing was sent.
    #[error("Some checkout fields are invalid")]
    InvalidFields(Vec<FieldError>),

    /// The cart is empty; nothing was sent.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart entry lost its book id; nothing was sent.
    #[error("Cart contains an item without a valid book id")]
    UnresolvedItem,

    /// The server rejected the order. The cart is preserved.
    #[error("Order was rejected: {0}")]
    Rejected(OrderError),

    /// The request never completed (timeout, closed channel). The cart is
    /// preserved and the submission can be retried.
    #[error("Failed to place order: {0}")]
    Transport(String),
}

/// Submit the cart as an order.
///
/// Local failures (invalid fields, empty cart, unresolvable item) return
/// before any call leaves this function. The gateway call is bounded by
/// `timeout`. The cart is cleared only on a confirmed success.
pub async fn submit_order<S, G>(
    cart: &mut CartStore<S>,
    customer: CustomerInfo,
    notes: Option<String>,
    gateway: &G,
    timeout: Duration,
) -> Result<Order, CheckoutError>
where
    S: CartStorage,
    G: OrderGateway + ?Sized,
{
    validate_customer(&customer).map_err(CheckoutError::InvalidFields)?;

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut items = Vec::with_capacity(cart.items().len());
    for entry in cart.items() {
        if !entry.book.resolvable() {
            warn!(title = %entry.book.title, "Refusing to submit a cart entry without a book id");
            return Err(CheckoutError::UnresolvedItem);
        }
        items.push(OrderItemRequest {
            book_id: entry.book.id.clone(),
            quantity: entry.quantity,
        });
    }

    let request = OrderRequest {
        customer,
        items,
        total_price: cart.total_price(),
        notes,
    };

    match tokio::time::timeout(timeout, gateway.place_order(request)).await {
        Ok(Ok(order)) => {
            cart.clear();
            info!(order_id = %order.id, total = order.total_price, "Order placed, cart cleared");
            Ok(order)
        }
        Ok(Err(OrderError::Store(msg))) => {
            error!(error = %msg, "Order submission failed in transit, cart preserved");
            Err(CheckoutError::Transport(msg))
        }
        Ok(Err(rejection)) => {
            warn!(error = %rejection, "Order rejected by server, cart preserved");
            Err(CheckoutError::Rejected(rejection))
        }
        Err(_) => {
            error!("Order submission timed out, cart preserved");
            Err(CheckoutError::Transport(
                "order submission timed out".to_string(),
            ))
        }
    }
}

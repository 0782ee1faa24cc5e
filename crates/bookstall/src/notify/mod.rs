//! # Post-Commit Notifications
//!
//! Side effects that fire after an order has been persisted: an alert to the
//! store owner and a confirmation to the customer. Hooks run in registration
//! order, each one's failure is caught and logged individually, and none of
//! it can affect the order result. A hook that fails does not stop the hooks
//! behind it.
//!
//! The real delivery channel (SMTP, whatever) is outside this repository;
//! the shipped hooks write structured log lines in its place. Anything that
//! implements [`OrderPlacedHook`] can be registered instead.

use crate::model::Order;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Failure of one notification hook. Logged, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// A side effect to run after an order is persisted.
#[async_trait]
pub trait OrderPlacedHook: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    async fn order_placed(&self, order: &Order) -> Result<(), NotifyError>;
}

/// An ordered list of post-commit hooks.
pub struct Notifier {
    hooks: Vec<Arc<dyn OrderPlacedHook>>,
}

impl Notifier {
    /// A notifier with no hooks.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// The standard pair: owner alert plus customer confirmation.
    pub fn with_default_hooks() -> Self {
        let mut notifier = Self::new();
        notifier.register(Arc::new(OwnerAlert));
        notifier.register(Arc::new(CustomerConfirmation));
        notifier
    }

    pub fn register(&mut self, hook: Arc<dyn OrderPlacedHook>) {
        self.hooks.push(hook);
    }

    /// Run every hook against the persisted order. Failures are logged per
    /// hook and swallowed.
    pub async fn order_placed(&self, order: &Order) {
        for hook in &self.hooks {
            if let Err(e) = hook.order_placed(order).await {
                warn!(
                    hook = hook.name(),
                    order_id = %order.id,
                    error = %e,
                    "Notification hook failed"
                );
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Tells the store owner a new order landed.
pub struct OwnerAlert;

#[async_trait]
impl OrderPlacedHook for OwnerAlert {
    fn name(&self) -> &'static str {
        "owner_alert"
    }

    async fn order_placed(&self, order: &Order) -> Result<(), NotifyError> {
        info!(
            order_id = %order.id,
            total = order.total_price,
            items = order.lines.len(),
            "New order alert for store owner"
        );
        Ok(())
    }
}

/// Confirms the order back to the customer.
pub struct CustomerConfirmation;

#[async_trait]
impl OrderPlacedHook for CustomerConfirmation {
    fn name(&self) -> &'static str {
        "customer_confirmation"
    }

    async fn order_placed(&self, order: &Order) -> Result<(), NotifyError> {
        info!(
            order_id = %order.id,
            email = %order.customer.email,
            "Order confirmation sent to customer"
        );
        Ok(())
    }
}

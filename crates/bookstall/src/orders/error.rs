//! Error types for the orders collection.

use thiserror::Error;

/// Errors that can occur while placing or fetching an order.
///
/// Every rejection carries the offending values so the failure can be
/// reported back in full: a total mismatch names both totals, a missing
/// book names its id.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request carried no items.
    #[error("Order must contain at least one item")]
    Empty,

    /// The claimed total is not a usable positive amount.
    #[error("Order total must be greater than zero, got {0}")]
    InvalidTotal(f64),

    /// A requested line has a zero quantity.
    #[error("Invalid quantity for book {book_id}")]
    InvalidQuantity { book_id: String },

    /// A requested book id does not resolve in the catalog. The whole order
    /// is rejected; there are no partial orders.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// The server-calculated total diverged from the claimed total beyond
    /// tolerance. Both values are reported.
    #[error("Order total mismatch: claimed {claimed:.2}, calculated {calculated:.2}")]
    TotalMismatch { claimed: f64, calculated: f64 },

    /// The order data failed a shape check.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The generated order id collided with an existing order.
    #[error("Duplicate order id: {0}")]
    DuplicateId(String),

    /// An infrastructure failure between client and collection.
    #[error("Order store error: {0}")]
    Store(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Store(msg)
    }
}

//! # Checkout
//!
//! Everything between "cart is full" and "order is placed":
//!
//! - [`validate`] - pure per-field validators and the form-level aggregate
//! - [`submit`] - cart to [`OrderRequest`](crate::model::OrderRequest)
//!   transformation, the [`OrderGateway`] seam, and the timeout-bounded
//!   submission with its three distinct outcomes

pub mod submit;
pub mod validate;

pub use submit::{submit_order, CheckoutError, OrderGateway};
pub use validate::{
    validate_address, validate_customer, validate_email, validate_name, validate_phone, FieldError,
};

//! # Bookstall
//!
//! An online bookstore built on the `docstore` collection engine: a book
//! catalog, a client-side shopping cart with versioned persistence, checkout
//! validation, and a price-revalidating order pipeline behind a JSON API.
//!
//! ## Module Tour
//!
//! The store splits into a client half and a server half that meet at the
//! order submission seam.
//!
//! ### Client half
//! - [`cart`] - the session's cart store: merge-on-add, derived totals
//!   recomputed on every mutation, write-through persistence under a
//!   versioned key, and self-healing rehydration.
//! - [`checkout`] - pure field validators plus the submission flow that
//!   turns a cart into an order request and handles success, rejection,
//!   and transport failure distinctly.
//!
//! ### Server half
//! - [`catalog`] - the book collection with filtered/sorted/paginated
//!   listing, search, and the classification list.
//! - [`orders`] - the order collection. Its insert hook is the one real
//!   invariant in the system: every line is re-priced from the catalog and
//!   the claimed total must match the recomputed one within a cent.
//! - [`notify`] - post-commit hooks (owner alert, customer confirmation)
//!   whose failures never affect the order.
//! - [`http`] - the axum surface with `{success, data}` envelopes.
//!
//! ### Shared
//! - [`model`] - books, customers, orders.
//! - [`clients`] - typed wrappers over the generic collection clients.
//! - [`config`] - environment-driven settings.
//! - [`lifecycle`] - the [`Bookstall`](lifecycle::Bookstall) orchestrator.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -p bookstall
//! ```
//!
//! The binary seeds a demo catalog and serves the API on
//! `BOOKSTALL_ADDR` (default `127.0.0.1:8080`).

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod orders;

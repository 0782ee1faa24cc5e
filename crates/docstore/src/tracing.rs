//! # Tracing Setup
//!
//! Structured logging for collections and everything built on them. The
//! engine logs every operation with the collection name and document id as
//! fields; `RUST_LOG` selects how much of it is shown.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and outcomes
//! RUST_LOG=debug cargo run    # full request payloads
//! ```
//!
//! The format is compact with targets suppressed: the `collection` field
//! already says where a line came from, so module paths are dropped.

/// Initialize the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

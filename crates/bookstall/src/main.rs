//! Bookstall server binary: seed a demo catalog, serve the JSON API, shut
//! down cleanly on ctrl-c.

use bookstall::config::Config;
use bookstall::http::{self, AppState};
use bookstall::lifecycle::Bookstall;
use bookstall::model::BookDraft;
use docstore::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env();
    let system = Bookstall::new();

    seed_catalog(&system).await;

    let state = AppState {
        catalog: system.catalog.clone(),
        orders: system.orders.clone(),
    };
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "Bookstall API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {e}"))?;

    system.shutdown().await?;

    info!("Bookstall stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        error!("Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

/// A handful of books so the API answers something out of the box.
async fn seed_catalog(system: &Bookstall) {
    let drafts = [
        BookDraft {
            title: "Compilers at Dusk".to_string(),
            publisher: "Northlight".to_string(),
            image: "/covers/compilers-at-dusk.jpg".to_string(),
            price: 39.50,
            class: Some("systems".to_string()),
        },
        BookDraft {
            title: "A Field Guide to Rivers".to_string(),
            publisher: "Meadow Press".to_string(),
            image: "/covers/field-guide-rivers.jpg".to_string(),
            price: 18.00,
            class: Some("nature".to_string()),
        },
        BookDraft {
            title: "Bread, Daily".to_string(),
            publisher: "Meadow Press".to_string(),
            image: "/covers/bread-daily.jpg".to_string(),
            price: 24.99,
            class: Some("cooking".to_string()),
        },
        BookDraft {
            title: "Compact Gardens".to_string(),
            publisher: "Northlight".to_string(),
            image: "/covers/compact-gardens.jpg".to_string(),
            price: 12.50,
            class: Some("nature".to_string()),
        },
        BookDraft {
            title: "The Quiet Ledger".to_string(),
            publisher: "Smallhouse".to_string(),
            image: "/covers/quiet-ledger.jpg".to_string(),
            price: 9.99,
            class: None,
        },
    ];

    for draft in drafts {
        let title = draft.title.clone();
        match system.catalog.add_book(draft).await {
            Ok(id) => info!(%id, title, "Seeded book"),
            Err(e) => error!(title, error = %e, "Failed to seed book"),
        }
    }
}

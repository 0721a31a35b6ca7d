//! HTTP server for the course catalog.
//!
//! The server keeps the catalog in memory for the lifetime of the process.
//! Nothing is persisted; a restart returns to the seed data.
//!
//! ```no_run
//! use catalog_server_rs::{serve, AppState};
//! use catalog_store_rs::Catalog;
//!
//! # async fn run() -> std::io::Result<()> {
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! serve(listener, AppState::new(Catalog::seeded()), std::future::pending()).await
//! # }
//! ```

pub mod config;
pub mod http;
pub mod logging;
pub mod state;

use std::future::Future;

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use http::build_router;
pub use state::AppState;

/// Serves the catalog on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

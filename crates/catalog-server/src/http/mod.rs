//! HTTP surface of the catalog.
//!
//! | Method | Path             | Response                              |
//! |--------|------------------|---------------------------------------|
//! | GET    | `/health`        | `{"status":"ok", ...}`                |
//! | GET    | `/api/items`     | filtered item array                   |
//! | GET    | `/api/items/:id` | one item, or 404                      |
//! | POST   | `/api/items`     | 201 with the created item, or 400     |
//!
//! Anything else answers 404 `{"message":"Route not found"}`.

mod error;
mod handlers;
mod middleware;

pub use error::ServerError;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Builds the router with all routes and middleware applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/api/items/:id", get(handlers::get_item))
        .fallback(handlers::route_not_found)
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(axum::middleware::from_fn(
            middleware::request_tracing_middleware,
        ))
        .with_state(state)
}

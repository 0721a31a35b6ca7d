//! Request handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_api_rs::models::{HealthStatus, Item, ItemQuery, NewItem};

use super::error::ServerError;
use crate::state::AppState;

/// `GET /health`
pub(crate) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// `GET /api/items`
///
/// Never rejects its input: unknown parameters are ignored, as are
/// criteria given more than once.
pub(crate) async fn list_items(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Item>>, ServerError> {
    let Query(pairs) = params?;
    let query = ItemQuery::from_pairs(pairs);

    let catalog = state.catalog().read().await;
    let items: Vec<Item> = catalog.filter(&query).into_iter().cloned().collect();
    tracing::debug!(
        matched = items.len(),
        total = catalog.len(),
        "filtered items"
    );
    Ok(Json(items))
}

/// `GET /api/items/:id`
pub(crate) async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ServerError> {
    let catalog = state.catalog().read().await;
    catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or(ServerError::ItemNotFound(id))
}

/// `POST /api/items`
pub(crate) async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ServerError> {
    let Json(new_item) = body?;

    let item = {
        let mut catalog = state.catalog().write().await;
        catalog.create(new_item).map_err(|err| {
            tracing::warn!(missing = ?err.missing(), "rejected item creation");
            err
        })?
    };

    tracing::info!(id = %item.id, name = %item.name, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Fallback for requests that match no route.
pub(crate) async fn route_not_found() -> ServerError {
    ServerError::RouteNotFound
}

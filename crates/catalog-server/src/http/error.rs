//! Error responses for the HTTP surface.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_api_rs::models::{MessageBody, ValidationErrorBody, ITEM_NOT_FOUND_MESSAGE};
use catalog_store_rs::CreateError;

/// Message for requests that match no route.
pub(crate) const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No item has the requested id.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// No route matches the request.
    #[error("route not found")]
    RouteNotFound,

    /// The creation payload lacks required fields.
    #[error(transparent)]
    Create(#[from] CreateError),

    /// The request body or query string could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Anything else; reported as a 500 with the detail echoed back.
    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ServerError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::ItemNotFound(_) | ServerError::RouteNotFound => StatusCode::NOT_FOUND,
            ServerError::Create(_) | ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status().is_server_error() {
            ServerError::Internal {
                message: "Error creating item",
                detail: rejection.body_text(),
            }
        } else {
            ServerError::InvalidRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ServerError::ItemNotFound(_) => {
                (status, Json(MessageBody::new(ITEM_NOT_FOUND_MESSAGE))).into_response()
            }
            ServerError::RouteNotFound => {
                (status, Json(MessageBody::new(ROUTE_NOT_FOUND_MESSAGE))).into_response()
            }
            ServerError::Create(err) => {
                (status, Json(ValidationErrorBody::missing_fields(err.missing()))).into_response()
            }
            ServerError::InvalidRequest(detail) => (
                status,
                Json(MessageBody::with_error("Invalid request body", detail)),
            )
                .into_response(),
            ServerError::Internal { message, detail } => {
                (status, Json(MessageBody::with_error(message, detail))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::ItemNotFound("9".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ServerError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServerError::Create(CreateError::MissingFields {
                missing: vec!["name"]
            })
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::Internal {
                message: "Error retrieving items",
                detail: "boom".to_string()
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ServerError::InvalidRequest("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

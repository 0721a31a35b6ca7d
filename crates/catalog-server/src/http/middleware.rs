//! Request middleware: tracing and CORS.

use std::time::Instant;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;

use super::error::ServerError;

const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
const ALLOW_HEADERS: &str = "content-type";

/// Wraps each request in an `http.request` span and logs its outcome.
pub(crate) async fn request_tracing_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if response.status().is_server_error() {
            tracing::error!(status, elapsed_ms, "request failed");
        } else {
            tracing::info!(status, elapsed_ms, "request completed");
        }
        response
    }
    .instrument(span)
    .await
}

/// Allows any origin and answers preflight requests directly.
///
/// A method the router does not accept on a known path is reported the same
/// way as an unknown path.
pub(crate) async fn cors_middleware(request: Request<Body>, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        insert_cors_headers(response.headers_mut(), true);
        return response;
    }

    let mut response = next.run(request).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        response = ServerError::RouteNotFound.into_response();
    }
    insert_cors_headers(response.headers_mut(), false);
    response
}

fn insert_cors_headers(headers: &mut HeaderMap, preflight: bool) {
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static("*"),
    );
    if preflight {
        headers.insert(
            "access-control-allow-methods",
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            "access-control-allow-headers",
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }
}

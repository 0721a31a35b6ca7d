//! HTTP client wrapper for the catalog API.

use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Error, Result};
use crate::models::{HealthStatus, Item, ItemQuery, MessageBody, NewItem, ValidationErrorBody};

/// Default server address (the server listens on port 5000 by default).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Path of the items collection.
const ITEMS_ENDPOINT: &str = "/api/items";

/// Path of the health check.
const HEALTH_ENDPOINT: &str = "/health";

/// Client for interacting with the catalog server.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Builder for [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct CatalogClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogClientBuilder {
    /// Sets the server base URL (scheme, host and port; no trailing path).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn build(self) -> Result<CatalogClient> {
        let http_client = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(CatalogClient {
            http_client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
        })
    }
}

impl CatalogClient {
    /// Creates a client for the given server with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Returns a builder for configuring a client.
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Lists items matching the query.
    ///
    /// Criteria that are absent or empty are left out of the query string.
    pub async fn list_items(&self, query: &ItemQuery) -> Result<Vec<Item>> {
        let query_string = query.to_query_string()?;
        let endpoint = if query_string.is_empty() {
            ITEMS_ENDPOINT.to_string()
        } else {
            format!("{}?{}", ITEMS_ENDPOINT, query_string)
        };

        self.get(&endpoint).await
    }

    /// Fetches a single item by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the server has no item with this id.
    pub async fn get_item(&self, id: &str) -> Result<Item> {
        let url = self.item_url(id)?;

        self.get_url(url).await.map_err(|e| {
            if e.is_not_found() {
                Error::Api(ApiError::NotFound {
                    resource: "item".to_string(),
                    id: id.to_string(),
                })
            } else {
                e
            }
        })
    }

    /// Creates an item and returns it as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if required fields are missing.
    pub async fn create_item(&self, new_item: &NewItem) -> Result<Item> {
        self.post(ITEMS_ENDPOINT, new_item).await
    }

    /// Queries the server health check.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get(HEALTH_ENDPOINT).await
    }

    /// Performs a GET request to the given endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The path below the base URL (e.g., "/api/items")
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.get_url(format!("{}{}", self.base_url, endpoint)).await
    }

    /// Returns the URL of a single item.
    ///
    /// The id becomes exactly one path segment, so `?`, `#` and `/` are
    /// percent-encoded instead of ending the path.
    fn item_url(&self, id: &str) -> Result<reqwest::Url> {
        let collection = format!("{}{}", self.base_url, ITEMS_ENDPOINT);
        let mut url = reqwest::Url::parse(&collection)
            .map_err(|e| Error::Url(format!("{collection}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| Error::Url(format!("{collection}: cannot have path segments")))?
            .push(id);
        Ok(url)
    }

    async fn get_url<T: DeserializeOwned>(&self, url: impl reqwest::IntoUrl) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Performs a POST request to the given endpoint with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(transport_error)?;
            return Ok(serde_json::from_str(&body)?);
        }

        Err(parse_error_response(response).await)
    }
}

/// Maps a transport failure to a network error where one applies.
fn transport_error(e: reqwest::Error) -> Error {
    if e.is_connect() || e.is_timeout() {
        Error::Api(ApiError::Network {
            message: e.to_string(),
        })
    } else {
        Error::Request(e)
    }
}

/// Parses an error response into our error types.
///
/// The server answers errors with `{ "message": ... }` bodies; validation
/// failures additionally list the required and missing fields.
async fn parse_error_response(response: reqwest::Response) -> Error {
    let status = response.status();
    let status_code = status.as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<MessageBody>(&body)
        .map(|b| b.message)
        .ok()
        .or_else(|| (!body.is_empty()).then(|| body.clone()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    let api_error = match status_code {
        404 => ApiError::NotFound {
            resource: "resource".to_string(),
            id: "unknown".to_string(),
        },
        400 => match serde_json::from_str::<ValidationErrorBody>(&body) {
            Ok(validation) => ApiError::Validation {
                message: validation.message,
                required: validation.required,
                missing: validation.missing,
            },
            Err(_) => ApiError::Validation {
                message,
                required: Vec::new(),
                missing: Vec::new(),
            },
        },
        _ => ApiError::Http {
            status: status_code,
            message,
        },
    };

    Error::Api(api_error)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

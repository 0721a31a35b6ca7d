//! Catalog access with an offline fallback.
//!
//! Reads go to the server first. When the server cannot be reached or
//! answers with something unusable, the same query is answered from a local
//! copy of the built-in catalog, using the same filter the server applies.

use catalog_api_rs::client::CatalogClient;
use catalog_api_rs::error::{Error, Result};
use catalog_api_rs::models::{HealthStatus, Item, ItemQuery, NewItem};
use catalog_store_rs::Catalog;
use serde::Serialize;

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Answered by the server.
    Remote,
    /// Answered from the local copy.
    Offline,
}

impl Source {
    /// Returns true if the result came from the local copy.
    pub fn is_offline(self) -> bool {
        self == Source::Offline
    }
}

/// Items together with where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: T,
    pub source: Source,
}

/// A catalog client that answers reads locally when the server fails.
#[derive(Debug)]
pub struct FallbackCatalog {
    client: CatalogClient,
    local: Catalog,
    offline: bool,
}

impl FallbackCatalog {
    /// Creates a fallback catalog over `client` with the built-in items as
    /// the local copy.
    pub fn new(client: CatalogClient) -> Self {
        Self::with_local(client, Catalog::seeded())
    }

    /// Creates a fallback catalog with an explicit local copy.
    pub fn with_local(client: CatalogClient, local: Catalog) -> Self {
        Self {
            client,
            local,
            offline: false,
        }
    }

    /// Skips the server entirely when `offline` is true.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Lists items matching `query`.
    ///
    /// Never fails: any remote error is logged and the query is answered
    /// from the local copy.
    pub async fn list_items(&self, query: &ItemQuery) -> Listing<Vec<Item>> {
        if !self.offline {
            match self.client.list_items(query).await {
                Ok(items) => {
                    return Listing {
                        items,
                        source: Source::Remote,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "listing from server failed, using offline catalog");
                }
            }
        }

        Listing {
            items: self.local.filter(query).into_iter().cloned().collect(),
            source: Source::Offline,
        }
    }

    /// Looks up one item.
    ///
    /// A 404 from the server is final and yields `None`; any other failure
    /// is answered from the local copy.
    pub async fn get_item(&self, id: &str) -> Listing<Option<Item>> {
        if !self.offline {
            match self.client.get_item(id).await {
                Ok(item) => {
                    return Listing {
                        items: Some(item),
                        source: Source::Remote,
                    }
                }
                Err(e) if e.is_not_found() => {
                    return Listing {
                        items: None,
                        source: Source::Remote,
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        id,
                        "lookup on server failed, using offline catalog"
                    );
                }
            }
        }

        Listing {
            items: self.local.find(id).cloned(),
            source: Source::Offline,
        }
    }

    /// Creates an item on the server. There is no offline fallback.
    pub async fn create_item(&self, new_item: &NewItem) -> Result<Item> {
        if self.offline {
            return Err(Error::Api(catalog_api_rs::error::ApiError::Network {
                message: "cannot create items in offline mode".to_string(),
            }));
        }
        self.client.create_item(new_item).await
    }

    /// Checks the server's health. There is no offline fallback.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.client.health().await
    }
}

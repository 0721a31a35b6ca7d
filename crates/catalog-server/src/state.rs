//! Shared application state.

use std::sync::Arc;

use catalog_store_rs::Catalog;
use tokio::sync::RwLock;

/// State handed to every request handler.
///
/// The catalog lives for the whole process. Reads take the shared lock;
/// creation takes the exclusive lock so id assignment and append happen
/// together.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    /// Wraps a catalog for sharing between handlers.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Returns the shared catalog.
    pub fn catalog(&self) -> &Arc<RwLock<Catalog>> {
        &self.catalog
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}

//! Prelude module for convenient imports.
//!
//! Re-exports the client, the error types and the data models so consumers
//! can pull in everything with a single use statement.
//!
//! # Example
//!
//! ```
//! use catalog_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - CatalogClient, CatalogClientBuilder (API client)
//! // - Error, ApiError, Result (error handling)
//! // - Item, NewItem, ItemQuery and the response bodies (data models)
//! ```

// Client types
pub use crate::client::{CatalogClient, CatalogClientBuilder};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Data models
pub use crate::models::{
    HealthStatus, Item, ItemQuery, MessageBody, NewItem, ValidationErrorBody, REQUIRED_FIELDS,
};

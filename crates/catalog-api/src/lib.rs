//! Course catalog API library.
//!
//! Provides the data models shared by the catalog server and its clients,
//! and a typed HTTP client for the server's REST endpoints.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use catalog_api_rs::prelude::*;
//!
//! let query = ItemQuery::new().search("react").level("Advanced");
//! assert!(!query.is_empty());
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;

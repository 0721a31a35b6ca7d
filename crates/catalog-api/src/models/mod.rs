//! API data types for the course catalog.
//!
//! These models are shared by the server, the HTTP client and the client's
//! offline copy of the catalog.

mod item;
mod query;
mod responses;

pub use item::*;
pub use query::*;
pub use responses::*;

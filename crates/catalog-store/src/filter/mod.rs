//! Search filtering for catalog items.
//!
//! Narrows a collection by up to four optional criteria, all of which must
//! hold for an item to be kept:
//!
//! - `search` - case-insensitive substring of the name, description, any
//!   tag, or the instructor
//! - `category` - case-insensitive equality
//! - `level` - case-insensitive equality
//! - `instructor` - case-insensitive substring
//!
//! Absent or empty criteria match everything. Filtering is stable: items
//! keep their order from the source collection.
//!
//! The same filter backs the server's items endpoint and the client's
//! offline fallback.

mod evaluator;

pub use evaluator::{filter_items, ItemFilter};

#[cfg(test)]
mod tests;

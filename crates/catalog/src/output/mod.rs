//! Output formatting utilities for the catalog CLI.
//!
//! This module provides functions for formatting data as tables or JSON:
//!
//! - [`items`] - Item output formatting (list, show, add)
//! - [`facets`] - Category and level summaries
//! - [`helpers`] - Common formatting utilities (truncation, prices, tags)

mod facets;
pub mod helpers;
mod items;

pub use facets::{format_facets_json, format_facets_table};
pub use items::{
    format_created_item, format_item_details_json, format_item_details_table, format_items_json,
    format_items_table,
};

//! List command implementation.
//!
//! Lists items from the server, or from the offline catalog when the server
//! is unavailable, optionally filtered by search criteria.

use catalog_api_rs::models::{Item, ItemQuery};

use super::{CommandContext, Result};
use crate::fallback::FallbackCatalog;
use crate::output::helpers::format_source_note;
use crate::output::{format_items_json, format_items_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Search criteria.
    pub query: ItemQuery,
    /// Show at most this many items.
    pub limit: Option<usize>,
}

/// Executes the list command.
///
/// # Errors
///
/// Listing itself never fails; only writing JSON output can.
pub async fn execute(
    ctx: &CommandContext,
    opts: &ListOptions,
    catalog: &FallbackCatalog,
) -> Result<()> {
    let listing = catalog.list_items(&opts.query).await;
    tracing::debug!(
        count = listing.items.len(),
        source = ?listing.source,
        "listed items"
    );

    let items = apply_limit(listing.items, opts.limit);

    if ctx.json_output {
        println!("{}", format_items_json(&items, listing.source)?);
    } else if !ctx.quiet {
        print!("{}", format_items_table(&items, ctx.use_colors));
        if let Some(note) = format_source_note(listing.source, ctx.use_colors) {
            eprintln!("{note}");
        }
    }

    Ok(())
}

/// Keeps the first `limit` items.
fn apply_limit(mut items: Vec<Item>, limit: Option<usize>) -> Vec<Item> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

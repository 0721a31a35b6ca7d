//! Facets command implementation.
//!
//! Lists the distinct categories and levels, the choices a search form
//! would offer.

use catalog_api_rs::models::ItemQuery;
use catalog_store_rs::facets;

use super::{CommandContext, Result};
use crate::fallback::FallbackCatalog;
use crate::output::helpers::format_source_note;
use crate::output::{format_facets_json, format_facets_table};

/// Executes the facets command.
pub async fn execute(ctx: &CommandContext, catalog: &FallbackCatalog) -> Result<()> {
    let listing = catalog.list_items(&ItemQuery::new()).await;
    let categories = facets::categories(&listing.items);
    let levels = facets::levels(&listing.items);

    if ctx.json_output {
        println!(
            "{}",
            format_facets_json(&categories, &levels, listing.source)?
        );
    } else if !ctx.quiet {
        print!(
            "{}",
            format_facets_table(&categories, &levels, ctx.use_colors)
        );
        if let Some(note) = format_source_note(listing.source, ctx.use_colors) {
            eprintln!("{note}");
        }
    }

    Ok(())
}

//! Show command implementation.
//!
//! Displays the details of a single item.

use super::{CommandContext, CommandError, Result};
use crate::fallback::FallbackCatalog;
use crate::output::helpers::format_source_note;
use crate::output::{format_item_details_json, format_item_details_table};

/// Executes the show command.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if neither the server nor, when the
/// server is unavailable, the offline catalog knows the id.
pub async fn execute(ctx: &CommandContext, item_id: &str, catalog: &FallbackCatalog) -> Result<()> {
    let lookup = catalog.get_item(item_id).await;
    let item = lookup.items.ok_or_else(|| CommandError::NotFound {
        id: item_id.to_string(),
    })?;

    if ctx.json_output {
        println!("{}", format_item_details_json(&item, lookup.source)?);
    } else if !ctx.quiet {
        print!("{}", format_item_details_table(&item, ctx.use_colors));
        if let Some(note) = format_source_note(lookup.source, ctx.use_colors) {
            eprintln!("{note}");
        }
    }

    Ok(())
}

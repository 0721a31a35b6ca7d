//! Add command implementation.
//!
//! Creates a new item on the server. There is no offline mode for writes.

use catalog_api_rs::models::NewItem;

use super::{CommandContext, Result};
use crate::fallback::FallbackCatalog;
use crate::output::format_created_item;

/// Options for the add command.
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub name: String,
    pub price: f64,
    pub instructor: String,
    pub category: String,
    pub description: String,
    pub level: String,
    pub duration: String,
    pub tags: Vec<String>,
    pub unavailable: bool,
}

impl AddOptions {
    /// Builds the creation payload.
    ///
    /// Tags and availability are only sent when they differ from the
    /// server's defaults.
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            price: Some(self.price),
            available: self.unavailable.then_some(false),
            instructor: Some(self.instructor.clone()),
            duration: Some(self.duration.clone()),
            level: Some(self.level.clone()),
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            ..Default::default()
        }
    }
}

/// Executes the add command.
///
/// # Errors
///
/// Returns an API error if the server rejects the item or cannot be reached.
pub async fn execute(
    ctx: &CommandContext,
    opts: &AddOptions,
    catalog: &FallbackCatalog,
) -> Result<()> {
    let item = catalog.create_item(&opts.to_new_item()).await?;
    tracing::debug!(id = %item.id, "item created");

    if ctx.json_output || !ctx.quiet {
        print!("{}", format_created_item(&item, ctx.json_output)?);
        if ctx.json_output {
            println!();
        }
    }

    Ok(())
}

//! Item output formatting.

use catalog_api_rs::models::Item;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::fallback::Source;

use super::helpers::{format_available, format_price, format_rating, format_tags, truncate_str};

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub items: &'a [Item],
    pub count: usize,
    pub source: Source,
}

/// JSON output structure for the show command.
#[derive(Serialize)]
pub struct ShowOutput<'a> {
    pub item: &'a Item,
    pub source: Source,
}

/// Formats items as JSON.
pub fn format_items_json(items: &[Item], source: Source) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ListOutput {
        items,
        count: items.len(),
        source,
    })
}

/// Formats items as a table.
pub fn format_items_table(items: &[Item], use_colors: bool) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<4} {:<32} {:<20} {:<13} {:>8} {:<5} {}",
        "ID", "Name", "Category", "Level", "Price", "Open", "Instructor"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for item in items {
        // Padding is applied before coloring so escape codes don't skew columns.
        let available = format!("{:<5}", format_available(item.available, false));
        let available = if use_colors {
            if item.available {
                available.green().to_string()
            } else {
                available.red().to_string()
            }
        } else {
            available
        };

        let line = format!(
            "{:<4} {:<32} {:<20} {:<13} {:>8} {} {}",
            truncate_str(&item.id, 4),
            truncate_str(&item.name, 32),
            truncate_str(&item.category, 20),
            truncate_str(&item.level, 13),
            format_price(item.price),
            available,
            item.instructor
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats item details as JSON (show command).
pub fn format_item_details_json(item: &Item, source: Source) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ShowOutput { item, source })
}

/// Formats item details as a human-readable listing (show command).
pub fn format_item_details_table(item: &Item, use_colors: bool) -> String {
    let mut output = String::new();

    let name_label = if use_colors {
        "Item:".bold().to_string()
    } else {
        "Item:".to_string()
    };
    output.push_str(&format!("{} {}\n", name_label, item.name));
    output.push_str(&format!("ID: {}\n", item.id));
    output.push_str(&format!("Category: {}\n", item.category));
    output.push_str(&format!("Level: {}\n", item.level));
    output.push_str(&format!("Instructor: {}\n", item.instructor));
    output.push_str(&format!("Duration: {}\n", item.duration));
    output.push_str(&format!("Price: {}\n", format_price(item.price)));
    output.push_str(&format!(
        "Available: {}\n",
        format_available(item.available, use_colors)
    ));

    if let Some(count) = item.enrollment_count {
        output.push_str(&format!("Enrolled: {}\n", count));
    }
    if item.rating.is_some() {
        output.push_str(&format!("Rating: {}\n", format_rating(item.rating)));
    }
    if !item.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", format_tags(&item.tags, usize::MAX)));
    }

    if !item.description.is_empty() {
        output.push_str("Description:\n");
        for line in item.description.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

/// Formats a created item (add command).
pub fn format_created_item(item: &Item, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(item)
    } else {
        Ok(format!("Created item {}: {}\n", item.id, item.name))
    }
}

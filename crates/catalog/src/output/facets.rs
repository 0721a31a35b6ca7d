//! Category and level summaries.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::fallback::Source;

/// JSON output structure for the facets command.
#[derive(Serialize)]
pub struct FacetsOutput<'a> {
    pub categories: &'a [&'a str],
    pub levels: &'a [&'a str],
    pub source: Source,
}

/// Formats facets as JSON.
pub fn format_facets_json(
    categories: &[&str],
    levels: &[&str],
    source: Source,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&FacetsOutput {
        categories,
        levels,
        source,
    })
}

/// Formats facets as two titled lists.
pub fn format_facets_table(categories: &[&str], levels: &[&str], use_colors: bool) -> String {
    let mut output = String::new();
    push_section(&mut output, "Categories", categories, use_colors);
    output.push('\n');
    push_section(&mut output, "Levels", levels, use_colors);
    output
}

fn push_section(output: &mut String, title: &str, values: &[&str], use_colors: bool) {
    let heading = format!("{} ({}):", title, values.len());
    if use_colors {
        output.push_str(&format!("{}\n", heading.bold()));
    } else {
        output.push_str(&heading);
        output.push('\n');
    }
    for value in values {
        output.push_str(&format!("  {}\n", value));
    }
}

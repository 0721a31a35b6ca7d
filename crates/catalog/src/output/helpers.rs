//! Common helper functions for output formatting.

use owo_colors::OwoColorize;

use crate::fallback::Source;

/// Truncates a string to at most `max_len` characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a price for display.
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("${price:.2}")
    }
}

/// Formats availability for display.
pub fn format_available(available: bool, use_colors: bool) -> String {
    let label = if available { "yes" } else { "no" };
    if use_colors {
        if available {
            label.green().to_string()
        } else {
            label.red().to_string()
        }
    } else {
        label.to_string()
    }
}

/// Formats tags for display.
pub fn format_tags(tags: &[String], max_len: usize) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let formatted: Vec<String> = tags.iter().map(|t| format!("#{t}")).collect();
    truncate_str(&formatted.join(" "), max_len)
}

/// Formats a rating with one decimal.
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map(|r| format!("{r:.1}")).unwrap_or_default()
}

/// Returns a note to print under results that came from the offline copy.
pub fn format_source_note(source: Source, use_colors: bool) -> Option<String> {
    if !source.is_offline() {
        return None;
    }

    let note = "(server unavailable; showing offline catalog)";
    Some(if use_colors {
        note.yellow().to_string()
    } else {
        note.to_string()
    })
}

//! Distinct category and level values for building search choices.

use std::collections::HashSet;

use catalog_api_rs::models::Item;

/// Returns the distinct categories, in order of first appearance.
pub fn categories<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<&'a str> {
    distinct(items.into_iter().map(|item| item.category.as_str()))
}

/// Returns the distinct levels, in order of first appearance.
pub fn levels<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<&'a str> {
    distinct(items.into_iter().map(|item| item.level.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

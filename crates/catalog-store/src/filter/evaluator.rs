//! Criteria evaluation against catalog items.
//!
//! # Example
//!
//! ```
//! use catalog_api_rs::models::ItemQuery;
//! use catalog_store_rs::filter::ItemFilter;
//! use catalog_store_rs::seed::seed_items;
//!
//! let items = seed_items();
//! let query = ItemQuery::new().category("web development").level("beginner");
//!
//! let filter = ItemFilter::new(&query);
//! let matches = filter.filter_items(&items);
//! assert!(matches.iter().all(|i| i.category == "Web Development"));
//! ```

use catalog_api_rs::models::{Item, ItemQuery};

/// Evaluates an [`ItemQuery`] against items.
///
/// Criteria are lowercased once on construction. Absent and empty criteria
/// are dropped, so an empty query matches everything.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    search: Option<String>,
    category: Option<String>,
    level: Option<String>,
    instructor: Option<String>,
}

impl ItemFilter {
    /// Creates a filter from the given criteria.
    pub fn new(query: &ItemQuery) -> Self {
        Self {
            search: normalize(&query.search),
            category: normalize(&query.category),
            level: normalize(&query.level),
            instructor: normalize(&query.instructor),
        }
    }

    /// Returns true if the filter accepts every item.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.level.is_none()
            && self.instructor.is_none()
    }

    /// Returns true if the item satisfies every criterion.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_search(item)
            && self.matches_category(item)
            && self.matches_level(item)
            && self.matches_instructor(item)
    }

    /// Filters a slice of items, keeping source order.
    pub fn filter_items<'b>(&self, items: &'b [Item]) -> Vec<&'b Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    fn matches_search(&self, item: &Item) -> bool {
        let Some(term) = &self.search else {
            return true;
        };

        contains_lower(&item.name, term)
            || contains_lower(&item.description, term)
            || item.tags.iter().any(|tag| contains_lower(tag, term))
            || contains_lower(&item.instructor, term)
    }

    fn matches_category(&self, item: &Item) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| item.category.to_lowercase() == category)
    }

    fn matches_level(&self, item: &Item) -> bool {
        self.level
            .as_deref()
            .map_or(true, |level| item.level.to_lowercase() == level)
    }

    fn matches_instructor(&self, item: &Item) -> bool {
        self.instructor
            .as_deref()
            .map_or(true, |instructor| contains_lower(&item.instructor, instructor))
    }
}

/// Filters items by the query, returning owned copies in source order.
pub fn filter_items(items: &[Item], query: &ItemQuery) -> Vec<Item> {
    ItemFilter::new(query)
        .filter_items(items)
        .into_iter()
        .cloned()
        .collect()
}

fn normalize(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

/// `needle` must already be lowercase.
fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

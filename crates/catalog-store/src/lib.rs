//! In-memory course catalog.
//!
//! This crate holds the ordered item collection, the search filter applied
//! to it, and the built-in seed dataset. It performs no I/O apart from
//! optionally reading a seed file.

pub mod error;
pub mod facets;
pub mod filter;
pub mod seed;

pub use error::CreateError;
pub use filter::ItemFilter;
pub use seed::SeedError;

use catalog_api_rs::models::{Item, ItemQuery, NewItem};

/// The ordered, append-only item collection.
///
/// # Thread Safety
///
/// `Catalog` has no interior locking. Id assignment in [`Catalog::create`]
/// reads the current length and appends in two steps, so a shared catalog
/// must be wrapped in a lock that covers the whole call:
///
/// ```
/// use std::sync::{Arc, RwLock};
/// use catalog_store_rs::Catalog;
///
/// let catalog = Arc::new(RwLock::new(Catalog::seeded()));
/// assert_eq!(catalog.read().unwrap().len(), 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in dataset.
    pub fn seeded() -> Self {
        Self::from_items(seed::seed_items())
    }

    /// Creates a catalog from existing items, keeping their order.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Returns all items in collection order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the first item with the given id.
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the items matching the query, in collection order.
    pub fn filter(&self, query: &ItemQuery) -> Vec<&Item> {
        ItemFilter::new(query).filter_items(&self.items)
    }

    /// Validates and appends a new item, returning the stored copy.
    ///
    /// The id is the collection length plus one, moved past any id that is
    /// already taken. Tags default to empty, availability to true, and the
    /// enrollment count and rating to zero.
    ///
    /// # Errors
    ///
    /// Returns `CreateError::MissingFields` if any required field is absent
    /// or blank, or the price is not a non-negative number.
    pub fn create(&mut self, new_item: NewItem) -> Result<Item, CreateError> {
        let item = new_item
            .into_item(self.next_id())
            .map_err(|missing| CreateError::MissingFields { missing })?;

        self.items.push(item.clone());
        Ok(item)
    }

    /// Returns the id the next created item will receive.
    pub fn next_id(&self) -> String {
        let mut candidate = self.items.len() + 1;
        while self.find(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

//! Search criteria shared by the items endpoint and local filtering.

use serde::{Deserialize, Serialize};

/// Optional criteria for narrowing the item collection.
///
/// Field names match the query parameters of `GET /api/items`. All criteria
/// are combined with logical AND. A criterion that is `None` or an empty
/// string places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Free-text term matched against name, description, tags and instructor.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub search: Option<String>,

    /// Category, compared case-insensitively for equality.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub category: Option<String>,

    /// Level, compared case-insensitively for equality.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub level: Option<String>,

    /// Instructor, matched case-insensitively as a substring.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub instructor: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl ItemQuery {
    /// Creates an empty query that matches every item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sets the category criterion.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the level criterion.
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Sets the instructor criterion.
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Returns true if no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.search)
            && is_blank(&self.category)
            && is_blank(&self.level)
            && is_blank(&self.instructor)
    }

    /// Builds a query from decoded `key=value` pairs.
    ///
    /// Unknown keys are ignored. A key that appears more than once is not a
    /// single string value and places no constraint on the result.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        let mut repeated: Vec<String> = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let slot = match key {
                "search" => &mut query.search,
                "category" => &mut query.category,
                "level" => &mut query.level,
                "instructor" => &mut query.instructor,
                _ => continue,
            };
            if slot.is_some() {
                repeated.push(key.to_string());
            }
            *slot = Some(value.into());
        }

        for key in repeated {
            match key.as_str() {
                "search" => query.search = None,
                "category" => query.category = None,
                "level" => query.level = None,
                _ => query.instructor = None,
            }
        }
        query
    }

    /// Encodes the non-empty criteria as a URL query string (without `?`).
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }
}

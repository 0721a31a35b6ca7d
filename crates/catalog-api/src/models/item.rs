//! Item model for the catalog API.
//!
//! Items are the single entity of the catalog. The same shape is used by the
//! server's in-memory collection, the JSON wire format, and the client's
//! offline copy.

use serde::{Deserialize, Serialize};

/// Names of the fields that must be present when creating an item.
///
/// The order matches the `required` list reported by the server on a
/// rejected creation.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "price",
    "instructor",
    "category",
    "description",
    "level",
    "duration",
];

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique, stable identifier. Never changes after creation.
    pub id: String,

    /// Display name of the course.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Classification label (e.g. "Web Development").
    pub category: String,

    /// Price, never negative.
    pub price: f64,

    /// Whether the course can currently be enrolled in.
    ///
    /// Older payloads call this `inStock`; both spellings are accepted.
    #[serde(alias = "inStock")]
    pub available: bool,

    /// Instructor or owning organization.
    pub instructor: String,

    /// Free-text duration (e.g. "8 weeks").
    pub duration: String,

    /// Difficulty label (e.g. "Beginner").
    pub level: String,

    /// Search tags, in display order.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Number of enrolled students.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_count: Option<u32>,

    /// Average rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Payload for creating an item.
///
/// Every field is optional so that missing required fields can be reported
/// together instead of failing on the first one. Unknown keys, including a
/// client-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, alias = "inStock", skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl NewItem {
    /// Returns the required fields that are absent or blank, in
    /// [`REQUIRED_FIELDS`] order.
    ///
    /// A price counts as missing unless it is a finite, non-negative number.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.clone().into_item(String::new()).err().unwrap_or_default()
    }

    /// Turns the payload into a stored item with the given id.
    ///
    /// Optional fields get their creation defaults: no tags, available,
    /// zero enrollments and a zero rating.
    ///
    /// # Errors
    ///
    /// Returns every missing required field, in [`REQUIRED_FIELDS`] order.
    pub fn into_item(self, id: impl Into<String>) -> Result<Item, Vec<&'static str>> {
        let mut missing = Vec::new();

        let name = required_text("name", self.name, &mut missing);
        let price = match self.price.filter(|p| p.is_finite() && *p >= 0.0) {
            Some(price) => price,
            None => {
                missing.push("price");
                0.0
            }
        };
        let instructor = required_text("instructor", self.instructor, &mut missing);
        let category = required_text("category", self.category, &mut missing);
        let description = required_text("description", self.description, &mut missing);
        let level = required_text("level", self.level, &mut missing);
        let duration = required_text("duration", self.duration, &mut missing);

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Item {
            id: id.into(),
            name,
            description,
            category,
            price,
            available: self.available.unwrap_or(true),
            instructor,
            duration,
            level,
            tags: self.tags.unwrap_or_default(),
            enrollment_count: Some(self.enrollment_count.unwrap_or(0)),
            rating: Some(self.rating.unwrap_or(0.0)),
        })
    }
}

/// Takes a required text field, recording it as missing when absent or blank.
fn required_text(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

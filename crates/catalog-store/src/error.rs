//! Error types for catalog mutations.

use catalog_api_rs::models::REQUIRED_FIELDS;
use thiserror::Error;

/// Errors that can occur when adding an item to the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreateError {
    /// One or more required fields were absent or blank.
    #[error("required fields are missing: {}", missing.join(", "))]
    MissingFields {
        /// The missing fields, in [`REQUIRED_FIELDS`] order.
        missing: Vec<&'static str>,
    },
}

impl CreateError {
    /// Every field a creation request must carry.
    pub fn required(&self) -> &'static [&'static str] {
        &REQUIRED_FIELDS
    }

    /// The fields that were missing from the rejected request.
    pub fn missing(&self) -> &[&'static str] {
        match self {
            CreateError::MissingFields { missing } => missing,
        }
    }
}

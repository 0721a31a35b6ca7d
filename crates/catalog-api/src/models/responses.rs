//! JSON bodies returned by the catalog server besides items.

use serde::{Deserialize, Serialize};

use super::item::REQUIRED_FIELDS;

/// Message used when a creation request lacks required fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Required fields are missing";

/// Message used when an item id is unknown.
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

/// A plain `{ "message": ... }` body, optionally with error detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageBody {
    /// Creates a body with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Creates a body carrying a message and the underlying error detail.
    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Body of a 400 response to a creation request with missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub message: String,

    /// Every required field name, regardless of which ones were missing.
    pub required: Vec<String>,

    /// The required fields that were actually missing.
    #[serde(default)]
    pub missing: Vec<String>,
}

impl ValidationErrorBody {
    /// Creates the body for the given missing fields.
    pub fn missing_fields<S: AsRef<str>>(missing: &[S]) -> Self {
        Self {
            message: MISSING_FIELDS_MESSAGE.to_string(),
            required: REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
            missing: missing.iter().map(|f| f.as_ref().to_string()).collect(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    /// The status reported by a running server.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Server is running".to_string(),
        }
    }

    /// Returns true if the server reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

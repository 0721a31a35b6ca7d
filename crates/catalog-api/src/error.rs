//! Error types for the catalog API client.

use std::fmt;

/// Errors reported by the catalog server or the transport in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Resource not found.
    NotFound { resource: String, id: String },
    /// The server rejected a creation request.
    Validation {
        message: String,
        /// Every field the server requires.
        required: Vec<String>,
        /// The fields that were missing from the request.
        missing: Vec<String>,
    },
    /// Network/connection error.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::Validation {
                message, missing, ..
            } => {
                if missing.is_empty() {
                    write!(f, "Validation error: {}", message)
                } else {
                    write!(f, "Validation error: {} ({})", message, missing.join(", "))
                }
            }
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            ApiError::Validation { .. } => 4,
            _ => 2,
        }
    }
}

/// Top-level error type for the client library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with an error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// Query criteria could not be encoded.
    #[error("invalid query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// A request URL could not be built from the base URL.
    #[error("invalid URL {0}")]
    Url(String),
}

impl Error {
    /// Returns the API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if this error means the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound { .. }))
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(e) => e.exit_code(),
            Error::Request(_) => 3,
            Error::Json(_) | Error::Query(_) | Error::Url(_) => 1,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

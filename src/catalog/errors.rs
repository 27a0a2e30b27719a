use thiserror::Error;

/// Typed error enum for catalog loading
///
/// Fetch errors (`Network`, `Status`, `Malformed`) mean no usable document
/// arrived. `Decode` means the document arrived but one of its videos was
/// incomplete. In both cases nothing is published.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Prefix URL missing or unusable as a base
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Network/connection errors (timeout, connection refused, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the feed server
    #[error("Feed request failed: {message} (status: {status})")]
    Status { status: u16, message: String },

    /// Body is not JSON or lacks the category structure
    #[error("Malformed feed: {0}")]
    Malformed(String),

    /// A video entry is missing a required field or carries an undecodable source
    #[error("Failed to decode video {index} in category '{category}': {message}")]
    Decode {
        category: String,
        index: usize,
        message: String,
    },
}

impl CatalogError {
    /// True when the feed could not be retrieved or parsed as a document
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Network(_) | CatalogError::Status { .. } | CatalogError::Malformed(_)
        )
    }

    /// True when an individual video entry failed to decode
    pub fn is_decode_error(&self) -> bool {
        matches!(self, CatalogError::Decode { .. })
    }

    /// Create an error from a reqwest error
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CatalogError::Network(format!("Request timeout: {}", error))
        } else if error.is_connect() {
            CatalogError::Network(format!("Connection failed: {}", error))
        } else {
            CatalogError::Network(format!("Request error: {}", error))
        }
    }

    /// Create an error from an HTTP status code and response body
    pub fn from_status(status: u16, body: String) -> Self {
        CatalogError::Status {
            status,
            message: body,
        }
    }
}

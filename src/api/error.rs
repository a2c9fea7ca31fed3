//! API error types for the Ecwid REST API client.

use thiserror::Error;

/// API-specific error type for the Ecwid REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or no response was received
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-200 status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A 200 response body did not match the expected shape
    #[error("Deserialization error: {0}")]
    Decode(String),

    /// The mutation succeeded at the HTTP level but touched no rows
    #[error("No rows affected by {operation} (count: {count})")]
    NoRowsAffected { operation: &'static str, count: i64 },

    /// Iteration stopped because the consumer cancelled it
    #[error("Iteration cancelled")]
    Cancelled,

    /// A page reported zero items before the end of the collection
    #[error("Pagination stalled at offset {offset} of {total}")]
    StalledPagination { offset: u64, total: u64 },

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Whether this error only signals consumer-requested cancellation.
    ///
    /// Cancellation unwinds through the same error path as real failures,
    /// so callers should check this before logging.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// HTTP status of an [`ApiError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by Ecwid on non-200 responses.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
    /// Machine-readable error code, present on some endpoints
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
}

impl ErrorResponse {
    /// The error message if the server sent a non-empty one.
    pub fn message(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }
}

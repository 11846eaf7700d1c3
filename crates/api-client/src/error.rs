//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Transport and server failures are carried as-is: `Request` wraps the
/// `reqwest` error untouched and `ApiResponse` keeps the raw body text.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token store could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned a non-2xx response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the server
        message: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the failed exchange, if the server answered
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiResponse { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Check if the server rejected the credentials (401)
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::ApiResponse { status: 401, .. })
    }

    /// Check if the request never reached the server
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect())
    }
}

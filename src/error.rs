//! Error types for the Kanka client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The client performs no automatic retries: every failure aborts the
//! current single-page fetch and is returned to the caller, who decides
//! whether to retry.

use thiserror::Error;

/// The main error type for the Kanka client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Dispatch Errors
    // ============================================================================
    /// An absolute endpoint (typically a pagination "next" link) does not
    /// share the client's configured base URL. Raised before any network
    /// I/O so a foreign link can never be followed.
    #[error("base URL in request to '{endpoint}' does not match {base_url}")]
    BaseUrlMismatch { endpoint: String, base_url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("non-2xx response: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    #[error("non-JSON response: {status}, Content-Type: {content_type}")]
    UnexpectedContentType { status: u16, content_type: String },

    #[error("failed to decode response envelope: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl Error {
    /// Create an invalid-config error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a base-URL mismatch error
    pub fn base_url_mismatch(endpoint: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::BaseUrlMismatch {
            endpoint: endpoint.into(),
            base_url: base_url.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, status_text: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create an unexpected content-type error
    pub fn unexpected_content_type(status: u16, content_type: impl Into<String>) -> Self {
        Self::UnexpectedContentType {
            status,
            content_type: content_type.into(),
        }
    }

    /// Check whether this error occurred before the request left the client
    /// (no network I/O was performed)
    pub fn is_pre_dispatch(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfigValue { .. } | Error::InvalidUrl(_) | Error::BaseUrlMismatch { .. }
        )
    }
}

/// Result type alias for the Kanka client
pub type Result<T> = std::result::Result<T, Error>;

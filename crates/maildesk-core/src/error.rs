//! Error types for the core library.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, TLS, broken body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    ///
    /// `message` is the server's `detail` field when it sent one, otherwise
    /// the operation's fallback text. It is shown to the user as-is.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// User-facing message.
        message: String,
    },

    /// Response or request body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint URL could not be built.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential storage error.
    #[error("Credential error: {0}")]
    Credential(#[from] crate::auth::CredentialError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the service (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

impl Error {
    /// Builds an [`Error::Api`] from a failed response.
    ///
    /// Takes the `detail` field from a JSON body when present and non-empty,
    /// otherwise uses `fallback`.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8], fallback: &str) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Api { status, message }
    }
}

//! Error types for `OAuth2` operations.

/// Result type alias for `OAuth2` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `OAuth2` error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `OAuth2` error returned by the authorization server (RFC 6749 §5.2).
    #[error("{}", oauth_message(.code, .description))]
    OAuth {
        /// Error code (e.g., `invalid_grant`).
        code: String,
        /// Human-readable description.
        description: Option<String>,
        /// URI of a page documenting the error.
        uri: Option<String>,
        /// State parameter echoed back by the server.
        state: Option<String>,
    },

    /// Non-success response whose body is not an RFC 6749 error object.
    #[error("invalid error response (HTTP {status}): {body}")]
    InvalidResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// URL parsing error.
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}

fn oauth_message(code: &str, description: &Option<String>) -> String {
    match description {
        Some(desc) => format!("{code}: {desc}"),
        None => code.to_string(),
    }
}

impl Error {
    /// Creates an OAuth error from error code and description.
    #[must_use]
    pub fn oauth_error(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::OAuth {
            code: code.into(),
            description: Some(description.into()),
            uri: None,
            state: None,
        }
    }

    /// Returns the RFC 6749 error code if this is a protocol error.
    #[must_use]
    pub fn oauth_code(&self) -> Option<&str> {
        match self {
            Self::OAuth { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Whether the server reported `authorization_pending` (RFC 8628).
    ///
    /// The user has not finished authorizing yet; poll the token
    /// endpoint again after the advertised interval.
    #[must_use]
    pub fn is_authorization_pending(&self) -> bool {
        self.oauth_code() == Some("authorization_pending")
    }

    /// Whether the server reported `slow_down` (RFC 8628).
    ///
    /// The polling interval must be increased by 5 seconds.
    #[must_use]
    pub fn is_slow_down(&self) -> bool {
        self.oauth_code() == Some("slow_down")
    }
}

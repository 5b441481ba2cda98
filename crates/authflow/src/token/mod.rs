//! Token endpoint response types.

use crate::error::Error;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Successful token endpoint response (RFC 6749 §5.1).
///
/// Returned by the authorization code, refresh token and device code
/// grants. Fields the server did not send stay `None`; unknown fields
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Access token string.
    pub access_token: String,
    /// Token type (usually "Bearer").
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: u32,
    /// Refresh token for obtaining new access tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of the refresh token in seconds, if the server reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_expires_in: Option<u32>,
    /// Scope granted by the authorization server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Session identifier, sent by some servers (e.g. Keycloak).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_state: Option<String>,
    /// OpenID Connect ID token, when the `openid` scope was granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl AccessTokenResponse {
    /// Absolute expiry of the access token, measured from now.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc::now() + Duration::seconds(i64::from(self.expires_in))
    }

    /// Absolute expiry of the refresh token, when the server reported one.
    #[must_use]
    pub fn refresh_expires_at(&self) -> Option<DateTime<Utc>> {
        self.refresh_expires_in
            .map(|secs| Utc::now() + Duration::seconds(i64::from(secs)))
    }
}

/// Error response from the authorization server (RFC 6749 §5.2).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub error: String,
    /// Human-readable description.
    pub error_description: Option<String>,
    /// URI of a page documenting the error.
    pub error_uri: Option<String>,
    /// State parameter echoed back by the server.
    pub state: Option<String>,
}

impl ErrorResponse {
    /// Converts to an [`Error`].
    #[must_use]
    pub fn into_error(self) -> Error {
        Error::OAuth {
            code: self.error,
            description: self.error_description,
            uri: self.error_uri,
            state: self.state,
        }
    }
}

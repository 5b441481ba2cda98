//! Device Authorization Flow requests (RFC 8628).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use url::Url;

/// Grant type URN for the device code grant (RFC 8628 §3.4).
const DEVICE_CODE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";

/// Device authorization response (RFC 8628 §3.2).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceAuthorizationResponse {
    /// Device code for polling the token endpoint.
    pub device_code: String,
    /// User code to display to the user.
    pub user_code: String,
    /// Verification URI where the user should go.
    pub verification_uri: String,
    /// Complete verification URI with the user code embedded (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_uri_complete: Option<String>,
    /// Expiration time in seconds.
    pub expires_in: u32,
    /// Polling interval in seconds (minimum 5 seconds).
    #[serde(default = "default_interval")]
    pub interval: u32,
}

const fn default_interval() -> u32 {
    5
}

/// Parameters for initiating a device authorization flow (RFC 8628 §3.1).
///
/// This flow is suitable for devices with limited input capabilities
/// or no browser (e.g. CLI applications, `IoT` devices).
#[derive(Debug, Clone)]
pub struct DeviceAuthorizationRequest {
    device_url: Url,
    client_id: String,
    scope: Option<String>,
}

impl DeviceAuthorizationRequest {
    /// Creates a device authorization request.
    ///
    /// # Errors
    ///
    /// Returns an error if `device_url` is not a valid URL.
    pub fn new(device_url: impl AsRef<str>, client_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            device_url: Url::parse(device_url.as_ref())?,
            client_id: client_id.into(),
            scope: None,
        })
    }

    /// Sets the requested scopes (space-separated).
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub(crate) const fn device_url(&self) -> &Url {
        &self.device_url
    }

    pub(crate) fn form_params(&self) -> Vec<(&str, &str)> {
        let mut params = vec![("client_id", self.client_id.as_str())];

        if let Some(scope) = &self.scope {
            params.push(("scope", scope.as_str()));
        }

        params
    }
}

/// Parameters for the device code grant (RFC 8628 §3.4).
///
/// One grant is one poll of the token endpoint. The server answers
/// `authorization_pending` or `slow_down` until the user finishes;
/// check [`crate::Error::is_authorization_pending`] and
/// [`crate::Error::is_slow_down`] and repeat after the interval from
/// the [`DeviceAuthorizationResponse`].
#[derive(Debug, Clone)]
pub struct DeviceCodeGrant {
    token_url: Url,
    client_id: String,
    device_code: String,
}

impl DeviceCodeGrant {
    /// Creates a device code grant.
    ///
    /// # Errors
    ///
    /// Returns an error if `token_url` is not a valid URL.
    pub fn new(
        token_url: impl AsRef<str>,
        client_id: impl Into<String>,
        device_code: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            token_url: Url::parse(token_url.as_ref())?,
            client_id: client_id.into(),
            device_code: device_code.into(),
        })
    }

    pub(crate) const fn token_url(&self) -> &Url {
        &self.token_url
    }

    pub(crate) fn form_params(&self) -> Vec<(&str, &str)> {
        vec![
            ("client_id", self.client_id.as_str()),
            ("grant_type", DEVICE_CODE_GRANT_TYPE),
            ("device_code", self.device_code.as_str()),
        ]
    }
}

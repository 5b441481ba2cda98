//! `OAuth2` authorization flows.

mod code;
mod device;
mod pkce;

pub use code::{AuthorizationCodeGrant, AuthorizationRequest};
pub use device::{DeviceAuthorizationRequest, DeviceAuthorizationResponse, DeviceCodeGrant};
pub use pkce::{PkceChallenge, code_challenge_s256, generate_verifier};

use crate::error::{Error, Result};
use crate::token::{AccessTokenResponse, ErrorResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Form content type sent on every token/device endpoint request.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Stateless `OAuth2` HTTP client.
///
/// Wraps a [`reqwest::Client`] and normalizes token endpoint
/// responses: 2xx bodies deserialize into typed records, non-2xx
/// bodies become [`Error::OAuth`]. Cloning is cheap; clones share the
/// underlying connection pool. No retries, timeouts or token caching
/// happen here — wrap calls in `tokio::time::timeout` if needed.
#[derive(Debug, Clone, Default)]
pub struct OAuthClient {
    http_client: Client,
}

impl OAuthClient {
    /// Creates a new OAuth client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// Creates a client backed by a caller-configured [`reqwest::Client`].
    #[must_use]
    pub const fn with_http_client(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OAuth`] if the server rejects the grant, or a
    /// transport/decode error if the exchange itself fails.
    pub async fn fetch_token_by_auth_code(
        &self,
        grant: &AuthorizationCodeGrant,
    ) -> Result<AccessTokenResponse> {
        self.post_form(grant.token_url(), &grant.form_params())
            .await
    }

    /// Obtains a fresh access token from a refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OAuth`] if the server rejects the grant, or a
    /// transport/decode error if the exchange itself fails.
    pub async fn fetch_token_by_refresh_token(
        &self,
        grant: &RefreshTokenGrant,
    ) -> Result<AccessTokenResponse> {
        self.post_form(grant.token_url(), &grant.form_params())
            .await
    }

    /// Polls the token endpoint once with a device code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OAuth`] while authorization is incomplete
    /// (`authorization_pending`, `slow_down`) or rejected, or a
    /// transport/decode error if the poll itself fails.
    pub async fn fetch_token_by_device_code(
        &self,
        grant: &DeviceCodeGrant,
    ) -> Result<AccessTokenResponse> {
        self.post_form(grant.token_url(), &grant.form_params())
            .await
    }

    /// Initiates a device authorization flow (RFC 8628 §3.1).
    ///
    /// Returns the device code and the user code that should be
    /// displayed to the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OAuth`] if the server rejects the request, or
    /// a transport/decode error if the request itself fails.
    pub async fn start_device_authorization(
        &self,
        request: &DeviceAuthorizationRequest,
    ) -> Result<DeviceAuthorizationResponse> {
        self.post_form(request.device_url(), &request.form_params())
            .await
    }

    /// POSTs a form body and routes the response through the shared
    /// success/error pipeline.
    async fn post_form<T: DeserializeOwned>(
        &self,
        url: &Url,
        params: &[(&str, &str)],
    ) -> Result<T> {
        tracing::debug!(%url, "Sending OAuth2 form request");

        let response = self
            .http_client
            .post(url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!(%url, %status, "OAuth2 request rejected");
            return Err(error_from_body(status, &body));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Into::into)
    }
}

/// Maps a non-2xx token endpoint body to a typed error.
///
/// RFC 6749 error objects become [`Error::OAuth`]; anything else (HTML
/// error pages, proxy output) becomes [`Error::InvalidResponse`].
fn error_from_body(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) => error.into_error(),
        Err(_) => Error::InvalidResponse {
            status: status.as_u16(),
            body: truncate_body(body),
        },
    }
}

fn truncate_body(body: &str) -> String {
    const MAX_LEN: usize = 256;
    if body.len() <= MAX_LEN {
        body.to_owned()
    } else {
        let cut: String = body.chars().take(MAX_LEN).collect();
        format!("{cut}...")
    }
}

/// Parameters for the `refresh_token` grant (RFC 6749 §6).
#[derive(Debug, Clone)]
pub struct RefreshTokenGrant {
    token_url: Url,
    client_id: String,
    refresh_token: String,
    client_secret: Option<String>,
}

impl RefreshTokenGrant {
    /// Creates a refresh token grant.
    ///
    /// # Errors
    ///
    /// Returns an error if `token_url` is not a valid URL.
    pub fn new(
        token_url: impl AsRef<str>,
        client_id: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            token_url: Url::parse(token_url.as_ref())?,
            client_id: client_id.into(),
            refresh_token: refresh_token.into(),
            client_secret: None,
        })
    }

    /// Sets the client secret for confidential clients.
    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    pub(crate) const fn token_url(&self) -> &Url {
        &self.token_url
    }

    pub(crate) fn form_params(&self) -> Vec<(&str, &str)> {
        let mut params = vec![
            ("client_id", self.client_id.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", self.refresh_token.as_str()),
        ];

        if let Some(secret) = &self.client_secret {
            params.push(("client_secret", secret.as_str()));
        }

        params
    }
}

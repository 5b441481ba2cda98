//! # authflow
//!
//! Client-side helpers for `OAuth2` authorization flows.
//!
//! A thin library: it builds the HTTP requests of the authorization
//! code, refresh token and device code grants (RFC 6749 / RFC 8628),
//! generates PKCE pairs (RFC 7636), and normalizes server responses
//! into typed records and errors. It keeps no state between calls —
//! token storage, refresh scheduling and retry policy belong to the
//! caller.
//!
//! ## Features
//!
//! - **Authorization Code Flow**: redirect URL construction and code
//!   exchange, with optional PKCE
//! - **Device Flow**: device authorization initiation and single-shot
//!   token polls
//! - **Refresh token grant**
//! - **Typed errors**: RFC 6749 §5.2 error bodies become
//!   [`Error::OAuth`] with code, description, URI and state
//!
//! ## Quick Start
//!
//! ### Authorization Code Flow (Desktop/Web Apps)
//!
//! ```ignore
//! use authflow::{AuthorizationCodeGrant, AuthorizationRequest, OAuthClient, PkceChallenge};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Generate a PKCE pair and build the redirect URL
//!     let pkce = PkceChallenge::generate();
//!     let request = AuthorizationRequest::new(
//!         "https://auth.example.com/authorize",
//!         "your_client_id",
//!         "http://localhost:8080",
//!     )?
//!     .with_scope("openid email")
//!     .with_state("random_state")
//!     .with_pkce(&pkce);
//!
//!     println!("Visit: {}", request.redirect_url());
//!
//!     // After the user authorizes, exchange the code for a token
//!     let code = "authorization_code_from_redirect";
//!     let grant = AuthorizationCodeGrant::new(
//!         "https://auth.example.com/token",
//!         "your_client_id",
//!         code,
//!         "http://localhost:8080",
//!     )?
//!     .with_code_verifier(pkce.verifier());
//!
//!     let token = OAuthClient::new().fetch_token_by_auth_code(&grant).await?;
//!     println!("Access token: {}", token.access_token);
//!     Ok(())
//! }
//! ```
//!
//! ### Device Flow (CLI/IoT Apps)
//!
//! ```ignore
//! use authflow::{DeviceAuthorizationRequest, DeviceCodeGrant, OAuthClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OAuthClient::new();
//!
//!     let request = DeviceAuthorizationRequest::new(
//!         "https://auth.example.com/device",
//!         "your_client_id",
//!     )?;
//!     let auth = client.start_device_authorization(&request).await?;
//!
//!     println!("Visit: {}", auth.verification_uri);
//!     println!("Enter code: {}", auth.user_code);
//!
//!     // Poll at the advertised interval until the user finishes
//!     let grant = DeviceCodeGrant::new(
//!         "https://auth.example.com/token",
//!         "your_client_id",
//!         &auth.device_code,
//!     )?;
//!     loop {
//!         match client.fetch_token_by_device_code(&grant).await {
//!             Ok(token) => break println!("Access token: {}", token.access_token),
//!             Err(e) if e.is_authorization_pending() => {
//!                 tokio::time::sleep(std::time::Duration::from_secs(auth.interval.into())).await;
//!             }
//!             Err(e) => return Err(e.into()),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod flow;
pub mod token;

pub use error::{Error, Result};
pub use flow::{
    AuthorizationCodeGrant, AuthorizationRequest, DeviceAuthorizationRequest,
    DeviceAuthorizationResponse, DeviceCodeGrant, OAuthClient, PkceChallenge, RefreshTokenGrant,
};
pub use token::AccessTokenResponse;

//! Example: Device Authorization Flow
//!
//! This example demonstrates how to:
//! 1. Initiate a device authorization flow
//! 2. Display the user code and verification URI
//! 3. Poll the token endpoint until the user finishes authorizing
//!
//! ## Prerequisites
//!
//! Register a client that allows the device grant, then set:
//!
//! ```bash
//! export OAUTH_DEVICE_URL="https://auth.example.com/device"
//! export OAUTH_TOKEN_URL="https://auth.example.com/token"
//! export OAUTH_CLIENT_ID="your-client-id"
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --example device_flow
//! ```

use std::env;
use std::time::Duration;

use authflow::{DeviceAuthorizationRequest, DeviceCodeGrant, OAuthClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authflow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let device_url = env::var("OAUTH_DEVICE_URL")?;
    let token_url = env::var("OAUTH_TOKEN_URL")?;
    let client_id = env::var("OAUTH_CLIENT_ID")?;

    // Step 1: Request device authorization
    let client = OAuthClient::new();
    let request = DeviceAuthorizationRequest::new(&device_url, &client_id)?;
    let auth = client.start_device_authorization(&request).await?;

    println!("Visit: {}", auth.verification_uri);
    if let Some(complete) = &auth.verification_uri_complete {
        println!("  (or: {complete})");
    }
    println!("Enter code: {}", auth.user_code);
    println!(
        "\nWaiting for authorization (expires in {} seconds)...",
        auth.expires_in
    );

    // Step 2: Poll the token endpoint at the advertised interval.
    // authorization_pending means keep waiting; slow_down means the
    // interval must grow by 5 seconds (RFC 8628 §3.5).
    let grant = DeviceCodeGrant::new(&token_url, &client_id, &auth.device_code)?;
    let mut interval = Duration::from_secs(u64::from(auth.interval));

    let token = loop {
        tokio::time::sleep(interval).await;

        match client.fetch_token_by_device_code(&grant).await {
            Ok(token) => break token,
            Err(e) if e.is_authorization_pending() => {}
            Err(e) if e.is_slow_down() => interval += Duration::from_secs(5),
            Err(e) => return Err(e.into()),
        }
    };

    println!("\n✓ Authorized!");
    println!("  Token type: {}", token.token_type);
    println!("  Expires at: {}", token.expires_at());
    println!("  Has refresh token: {}", token.refresh_token.is_some());

    Ok(())
}

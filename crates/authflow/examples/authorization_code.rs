//! Example: Authorization Code Flow with PKCE
//!
//! This example demonstrates how to:
//! 1. Generate a PKCE pair
//! 2. Build the authorization redirect URL
//! 3. Exchange the authorization code for an access token
//!
//! ## Prerequisites
//!
//! Register a public client with your authorization server (any RFC
//! 6749 server works: Keycloak, Auth0, Google, Microsoft, ...) with
//! `http://localhost:8080` as an allowed redirect URI, then set:
//!
//! ```bash
//! export OAUTH_AUTH_URL="https://auth.example.com/authorize"
//! export OAUTH_TOKEN_URL="https://auth.example.com/token"
//! export OAUTH_CLIENT_ID="your-client-id"
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --example authorization_code
//! ```

use std::env;
use std::io::{self, Write};

use authflow::{AuthorizationCodeGrant, AuthorizationRequest, OAuthClient, PkceChallenge};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const REDIRECT_URI: &str = "http://localhost:8080";

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

    let auth_url = env::var("OAUTH_AUTH_URL")?;
    let token_url = env::var("OAUTH_TOKEN_URL")?;
    let client_id = env::var("OAUTH_CLIENT_ID")?;

    // Step 1: Generate a PKCE pair
    let pkce = PkceChallenge::generate();
    println!("Generated PKCE verifier ({} chars)\n", pkce.verifier().len());

    // Step 2: Build the authorization URL
    let state = format!("state-{}", chrono::Utc::now().timestamp());
    let request = AuthorizationRequest::new(&auth_url, &client_id, REDIRECT_URI)?
        .with_scope("openid email")
        .with_state(&state)
        .with_pkce(&pkce);

    println!("Visit this URL to authorize the application:\n");
    println!("{}\n", request.redirect_url());
    println!("After authorizing, you'll be redirected to:");
    println!("  {REDIRECT_URI}/?code=AUTHORIZATION_CODE&state={state}\n");

    // In a real application you would open the URL in a browser and
    // capture the redirect with a local HTTP server.
    print!("Enter the authorization code from the redirect URL: ");
    io::stdout().flush()?;

    let mut code = String::new();
    io::stdin().read_line(&mut code)?;
    let code = code.trim();

    if code.is_empty() {
        println!("\nNo code entered. Exiting.");
        return Ok(());
    }

    // Step 3: Exchange the code for a token
    let grant = AuthorizationCodeGrant::new(&token_url, &client_id, code, REDIRECT_URI)?
        .with_code_verifier(pkce.verifier());

    let token = OAuthClient::new().fetch_token_by_auth_code(&grant).await?;

    println!("\n✓ Token obtained successfully!");
    println!("  Token type: {}", token.token_type);
    println!("  Expires at: {}", token.expires_at());
    println!("  Has refresh token: {}", token.refresh_token.is_some());
    println!("  Scope: {:?}", token.scope);

    Ok(())
}

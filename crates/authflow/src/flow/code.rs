//! Authorization Code Flow requests.

use super::pkce::PkceChallenge;
use crate::error::Result;
use url::Url;

/// Builder for the browser authorization redirect URL (RFC 6749 §4.1.1).
///
/// This flow is suitable for applications that can open a browser and
/// receive the authorization code via redirect. The library only
/// constructs the URL; performing the redirect and capturing the code
/// are the caller's job.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    authorization_url: Url,
    client_id: String,
    redirect_uri: String,
    scope: Option<String>,
    state: Option<String>,
    code_challenge: Option<String>,
}

impl AuthorizationRequest {
    /// Creates an authorization request.
    ///
    /// # Errors
    ///
    /// Returns an error if `authorization_url` is not a valid URL.
    pub fn new(
        authorization_url: impl AsRef<str>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            authorization_url: Url::parse(authorization_url.as_ref())?,
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            scope: None,
            state: None,
            code_challenge: None,
        })
    }

    /// Sets the requested scopes (space-separated).
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the opaque state echoed back on the redirect (CSRF protection).
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Attaches the challenge half of a PKCE pair.
    ///
    /// Keep the verifier half for the matching [`AuthorizationCodeGrant`].
    #[must_use]
    pub fn with_pkce(self, pkce: &PkceChallenge) -> Self {
        self.with_code_challenge(pkce.challenge())
    }

    /// Attaches a precomputed `S256` code challenge.
    #[must_use]
    pub fn with_code_challenge(mut self, challenge: impl Into<String>) -> Self {
        self.code_challenge = Some(challenge.into());
        self
    }

    /// Builds the URL the user agent should be redirected to.
    ///
    /// `response_type` is always `code`; `code_challenge_method=S256`
    /// is set exactly when a code challenge is present. Identical
    /// arguments always produce an identical URL.
    #[must_use]
    pub fn redirect_url(&self) -> Url {
        let mut url = self.authorization_url.clone();

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.client_id);

            if let Some(scope) = &self.scope {
                pairs.append_pair("scope", scope);
            }

            if let Some(state) = &self.state {
                pairs.append_pair("state", state);
            }

            if let Some(challenge) = &self.code_challenge {
                pairs
                    .append_pair("code_challenge_method", "S256")
                    .append_pair("code_challenge", challenge);
            }

            pairs.append_pair("redirect_uri", &self.redirect_uri);
        }

        url
    }
}

/// Parameters for the `authorization_code` grant (RFC 6749 §4.1.3).
#[derive(Debug, Clone)]
pub struct AuthorizationCodeGrant {
    token_url: Url,
    client_id: String,
    code: String,
    redirect_uri: String,
    code_verifier: Option<String>,
    client_secret: Option<String>,
}

impl AuthorizationCodeGrant {
    /// Creates an authorization code grant.
    ///
    /// # Errors
    ///
    /// Returns an error if `token_url` is not a valid URL.
    pub fn new(
        token_url: impl AsRef<str>,
        client_id: impl Into<String>,
        code: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            token_url: Url::parse(token_url.as_ref())?,
            client_id: client_id.into(),
            code: code.into(),
            redirect_uri: redirect_uri.into(),
            code_verifier: None,
            client_secret: None,
        })
    }

    /// Sets the PKCE verifier paired with the challenge sent on the redirect.
    #[must_use]
    pub fn with_code_verifier(mut self, verifier: impl Into<String>) -> Self {
        self.code_verifier = Some(verifier.into());
        self
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
            ("grant_type", "authorization_code"),
            ("code", self.code.as_str()),
        ];

        if let Some(verifier) = &self.code_verifier {
            params.push(("code_verifier", verifier.as_str()));
        }

        params.push(("redirect_uri", self.redirect_uri.as_str()));

        if let Some(secret) = &self.client_secret {
            params.push(("client_secret", secret.as_str()));
        }

        params
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request() -> AuthorizationRequest {
        AuthorizationRequest::new(
            "https://auth.example.com/authorize",
            "test_client",
            "http://localhost:8080",
        )
        .unwrap()
    }

    #[test]
    fn test_redirect_url_required_params() {
        let url = request().redirect_url();

        assert!(url.as_str().contains("response_type=code"));
        assert!(url.as_str().contains("client_id=test_client"));
        // Check URL-encoded redirect_uri
        assert!(
            url.as_str()
                .contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080")
        );
    }

    #[test]
    fn test_redirect_url_with_scope_and_state() {
        let url = request()
            .with_scope("openid email")
            .with_state("random_state")
            .redirect_url();

        // Check URL-encoded scope (space becomes + in query parameters)
        assert!(url.as_str().contains("scope=openid+email"));
        assert!(url.as_str().contains("state=random_state"));
    }

    #[test]
    fn test_redirect_url_with_pkce() {
        let pkce = PkceChallenge::generate();
        let url = request().with_pkce(&pkce).redirect_url();

        assert!(url.as_str().contains("code_challenge_method=S256"));
        assert!(
            url.as_str()
                .contains(&format!("code_challenge={}", pkce.challenge()))
        );
    }

    #[test]
    fn test_redirect_url_challenge_method_only_with_challenge() {
        let url = request().with_scope("email").redirect_url();
        assert!(!url.as_str().contains("code_challenge_method"));
        assert!(!url.as_str().contains("code_challenge"));
    }

    #[test]
    fn test_redirect_url_is_idempotent() {
        let req = request().with_scope("email").with_state("xyz");
        assert_eq!(req.redirect_url().as_str(), req.redirect_url().as_str());
    }

    #[test]
    fn test_redirect_url_param_order() {
        let url = request()
            .with_scope("email")
            .with_state("xyz")
            .with_code_challenge("abc123")
            .redirect_url();

        let keys: Vec<_> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(
            keys,
            [
                "response_type",
                "client_id",
                "scope",
                "state",
                "code_challenge_method",
                "code_challenge",
                "redirect_uri",
            ]
        );
    }

    #[test]
    fn test_auth_code_grant_params() {
        let grant = AuthorizationCodeGrant::new(
            "https://auth.example.com/token",
            "test_client",
            "auth_code_123",
            "http://localhost:8080",
        )
        .unwrap();

        assert_eq!(
            grant.form_params(),
            [
                ("client_id", "test_client"),
                ("grant_type", "authorization_code"),
                ("code", "auth_code_123"),
                ("redirect_uri", "http://localhost:8080"),
            ]
        );
    }

    #[test]
    fn test_auth_code_grant_includes_verifier_only_when_set() {
        let grant = AuthorizationCodeGrant::new(
            "https://auth.example.com/token",
            "test_client",
            "auth_code_123",
            "http://localhost:8080",
        )
        .unwrap()
        .with_code_verifier("verifier_456");

        let params = grant.form_params();
        assert!(params.contains(&("code_verifier", "verifier_456")));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(AuthorizationRequest::new("not a url", "client", "uri").is_err());
    }
}

//! PKCE (Proof Key for Code Exchange) implementation for `OAuth2`.
//!
//! PKCE (RFC 7636) enhances security for public clients by preventing
//! authorization code interception attacks. Only the `S256` challenge
//! method is supported; plain-text challenges are not.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Unreserved characters allowed in a code verifier (RFC 7636 §4.1).
const VERIFIER_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Default verifier length, the maximum RFC 7636 allows.
const DEFAULT_VERIFIER_LENGTH: usize = 128;

/// PKCE code challenge and verifier pair.
#[derive(Debug, Clone)]
pub struct PkceChallenge {
    /// Code verifier (random string).
    pub verifier: String,
    /// Code challenge (SHA256 hash of verifier).
    pub challenge: String,
    /// Challenge method (always S256).
    pub method: String,
}

impl PkceChallenge {
    /// Generates a new PKCE challenge with a 128-character verifier.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with_length(DEFAULT_VERIFIER_LENGTH)
    }

    /// Generates a new PKCE challenge with a verifier of `length` characters.
    ///
    /// RFC 7636 requires verifiers of 43 to 128 characters; lengths
    /// outside that window are passed through as requested and are the
    /// caller's responsibility.
    #[must_use]
    pub fn generate_with_length(length: usize) -> Self {
        let verifier = generate_verifier(length);
        let challenge = code_challenge_s256(&verifier);

        Self {
            verifier,
            challenge,
            method: "S256".to_string(),
        }
    }

    /// Returns the verifier.
    #[must_use]
    pub fn verifier(&self) -> &str {
        &self.verifier
    }

    /// Returns the challenge.
    #[must_use]
    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    /// Returns the method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }
}

/// Generates a random code verifier of exactly `length` characters,
/// drawn uniformly from the unreserved character set.
#[must_use]
pub fn generate_verifier(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..VERIFIER_CHARSET.len());
            char::from(VERIFIER_CHARSET[idx])
        })
        .collect()
}

/// Computes the `S256` code challenge for a verifier.
///
/// The challenge is the base64url-encoded (no padding) SHA-256 digest
/// of the verifier's ASCII bytes.
#[must_use]
pub fn code_challenge_s256(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pkce_generation() {
        let pkce = PkceChallenge::generate();
        assert_eq!(pkce.verifier.len(), 128);
        assert!(!pkce.challenge.is_empty());
        assert_eq!(pkce.method, "S256");
        assert_ne!(pkce.verifier, pkce.challenge);
    }

    #[test]
    fn test_generate_with_length_honors_length() {
        for length in [43, 64, 128] {
            let pkce = PkceChallenge::generate_with_length(length);
            assert_eq!(pkce.verifier.len(), length);
        }
    }

    #[test]
    fn test_challenge_matches_verifier_hash() {
        let pkce = PkceChallenge::generate();
        assert_eq!(pkce.challenge, code_challenge_s256(&pkce.verifier));
    }

    #[test]
    fn test_challenge_known_vector() {
        // RFC 7636 appendix B
        let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
        assert_eq!(
            code_challenge_s256(verifier),
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );
    }

    #[test]
    fn test_challenge_is_base64url_without_padding() {
        let challenge = code_challenge_s256("test_verifier_string");
        assert!(!challenge.contains('+'));
        assert!(!challenge.contains('/'));
        assert!(!challenge.contains('='));
        // SHA-256 digest is 32 bytes, 43 characters unpadded
        assert_eq!(challenge.len(), 43);
    }

    #[test]
    fn test_multiple_generations_unique() {
        let pkce1 = PkceChallenge::generate();
        let pkce2 = PkceChallenge::generate();
        assert_ne!(pkce1.verifier, pkce2.verifier);
        assert_ne!(pkce1.challenge, pkce2.challenge);
    }

    proptest! {
        #[test]
        fn prop_verifier_length_and_charset(length in 43usize..=128) {
            let verifier = generate_verifier(length);
            prop_assert_eq!(verifier.len(), length);
            prop_assert!(verifier.bytes().all(|b| VERIFIER_CHARSET.contains(&b)));
        }
    }
}

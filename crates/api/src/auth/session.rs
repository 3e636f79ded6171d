//! Session tokens issued by the identity provider.
//!
//! Browsers send the session as the `__session` cookie; API clients send it
//! as `Authorization: Bearer <token>`. Tokens are JWTs verified either with a
//! shared HS256 secret or with the provider's RS256 public key. The claims
//! carry the user id (`sub`) and the onboarding metadata bag.

use std::fmt;

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Cookie carrying the session token on browser requests.
pub const SESSION_COOKIE: &str = "__session";

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the identity provider's user id.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Public metadata attached to the user (onboarding fields).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Key material for verifying session tokens.
#[derive(Clone)]
pub struct SessionConfig {
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl SessionConfig {
    /// Verify tokens with a shared HS256 secret.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
        }
    }

    /// Verify tokens with the identity provider's RS256 public key (PEM).
    pub fn from_rsa_pem(pem: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        Ok(Self {
            decoding_key: DecodingKey::from_rsa_pem(pem.as_bytes())?,
            algorithm: Algorithm::RS256,
        })
    }

    /// Load session verification settings from environment variables.
    ///
    /// | Env Var                  | Required | Notes                         |
    /// |--------------------------|----------|-------------------------------|
    /// | `SESSION_JWT_PUBLIC_KEY` | one of   | RS256 PEM, takes precedence   |
    /// | `SESSION_JWT_SECRET`     | one of   | HS256 shared secret           |
    ///
    /// # Panics
    ///
    /// Panics if neither is set, the secret is empty, or the PEM is invalid.
    pub fn from_env() -> Self {
        if let Ok(pem) = std::env::var("SESSION_JWT_PUBLIC_KEY") {
            return Self::from_rsa_pem(&pem)
                .expect("SESSION_JWT_PUBLIC_KEY must be a valid RSA public key PEM");
        }

        let secret = std::env::var("SESSION_JWT_SECRET")
            .expect("SESSION_JWT_SECRET or SESSION_JWT_PUBLIC_KEY must be set");
        assert!(!secret.is_empty(), "SESSION_JWT_SECRET must not be empty");
        Self::from_secret(&secret)
    }
}

/// Find the session token on a request: bearer header first, then cookie.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value)
}

/// Validate and decode a session token, returning the embedded [`SessionClaims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &config.decoding_key,
        &Validation::new(config.algorithm),
    )?;
    Ok(token_data.claims)
}

/// Sign claims with an HS256 secret.
///
/// Tokens are normally minted by the identity provider; this exists for
/// local development against a shared secret.
pub fn sign_session_token(
    claims: &SessionClaims,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(), // HS256
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use serde_json::json;

    use super::*;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    fn claims(exp_offset_secs: i64) -> SessionClaims {
        let now = chrono::Utc::now().timestamp();
        SessionClaims {
            sub: "user_2abc".to_string(),
            exp: now + exp_offset_secs,
            iat: now,
            metadata: Some(json!({ "is_confirmed": true })),
        }
    }

    #[test]
    fn test_sign_and_validate_session_token() {
        let config = SessionConfig::from_secret(SECRET);
        let token = sign_session_token(&claims(600), SECRET).expect("signing should succeed");

        let decoded = validate_session_token(&token, &config).expect("token should validate");
        assert_eq!(decoded.sub, "user_2abc");
        assert_eq!(decoded.metadata, Some(json!({ "is_confirmed": true })));
    }

    #[test]
    fn test_expired_token_fails() {
        // Well past the default 60-second leeway.
        let token = sign_session_token(&claims(-300), SECRET).unwrap();
        let result = validate_session_token(&token, &SessionConfig::from_secret(SECRET));
        assert!(result.is_err(), "expired token must fail validation");
    }

    #[test]
    fn test_different_secrets_fail() {
        let token = sign_session_token(&claims(600), "secret-alpha").unwrap();
        let result = validate_session_token(&token, &SessionConfig::from_secret("secret-bravo"));
        assert!(result.is_err(), "token signed with a different secret must fail");
    }

    #[test]
    fn test_metadata_is_optional() {
        let mut without = claims(600);
        without.metadata = None;
        let token = sign_session_token(&without, SECRET).unwrap();
        let decoded = validate_session_token(&token, &SessionConfig::from_secret(SECRET)).unwrap();
        assert_eq!(decoded.metadata, None);
    }

    #[test]
    fn test_invalid_pem_is_rejected() {
        assert!(SessionConfig::from_rsa_pem("not a pem").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_session_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; __session=abc.def.ghi; other=1"),
        );
        assert_eq!(extract_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_takes_precedence_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        headers.insert(COOKIE, HeaderValue::from_static("__session=from-cookie"));
        assert_eq!(extract_token(&headers), Some("from-header"));
    }

    #[test]
    fn test_no_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        headers.insert(COOKIE, HeaderValue::from_static("__session="));
        assert_eq!(extract_token(&headers), None);
    }
}

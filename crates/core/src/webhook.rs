//! Verification of signed identity-provider webhook deliveries.
//!
//! Deliveries carry three headers:
//!
//! - `svix-id` -- unique message id
//! - `svix-timestamp` -- Unix seconds at signing time
//! - `svix-signature` -- space-separated `v1,<base64>` signatures
//!
//! The signed content is `"{id}.{timestamp}.{body}"`, HMAC-SHA256 keyed with
//! the base64-decoded signing secret (the `whsec_` prefix is optional). Any
//! one matching `v1` signature accepts the delivery.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_ID: &str = "svix-id";
pub const HEADER_TIMESTAMP: &str = "svix-timestamp";
pub const HEADER_SIGNATURE: &str = "svix-signature";

/// Maximum clock skew accepted between signing and verification.
pub const SIGNATURE_TOLERANCE_SECS: i64 = 5 * 60;

const SECRET_PREFIX: &str = "whsec_";
const SIGNATURE_VERSION: &str = "v1";

/// Event type emitted when an account is created at the identity provider.
pub const EVENT_USER_CREATED: &str = "user.created";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Webhook signing secret is not valid base64")]
    InvalidSecret,

    #[error("Webhook timestamp header is not a Unix timestamp")]
    InvalidTimestamp,

    #[error("Webhook timestamp is outside the 5 minute tolerance")]
    TimestampOutOfTolerance,

    #[error("No webhook signature matched")]
    NoMatchingSignature,
}

/// Holds the decoded signing key for one webhook endpoint.
#[derive(Clone)]
pub struct WebhookVerifier {
    key: Vec<u8>,
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

impl WebhookVerifier {
    pub fn new(secret: &str) -> Result<Self, WebhookError> {
        let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
        let key = STANDARD
            .decode(encoded.trim())
            .map_err(|_| WebhookError::InvalidSecret)?;
        if key.is_empty() {
            return Err(WebhookError::InvalidSecret);
        }
        Ok(Self { key })
    }

    fn mac(&self, msg_id: &str, timestamp: &str, payload: &[u8]) -> HmacSha256 {
        let mut mac =
            <HmacSha256 as Mac>::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(msg_id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);
        mac
    }

    /// Produce the `svix-signature` header value for a payload.
    pub fn sign(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> String {
        let digest = self
            .mac(msg_id, &timestamp.to_string(), payload)
            .finalize()
            .into_bytes();
        format!("{SIGNATURE_VERSION},{}", STANDARD.encode(digest))
    }

    /// Check a delivery's signature and freshness against `now` (Unix seconds).
    pub fn verify(
        &self,
        msg_id: &str,
        timestamp: &str,
        signatures: &str,
        payload: &[u8],
        now: i64,
    ) -> Result<(), WebhookError> {
        let sent_at: i64 = timestamp
            .trim()
            .parse()
            .map_err(|_| WebhookError::InvalidTimestamp)?;
        // The timestamp is caller-supplied; overflow counts as out of range.
        match now.checked_sub(sent_at).map(i64::unsigned_abs) {
            Some(skew) if skew <= SIGNATURE_TOLERANCE_SECS.unsigned_abs() => {}
            _ => return Err(WebhookError::TimestampOutOfTolerance),
        }

        let mac = self.mac(msg_id, timestamp.trim(), payload);

        let matched = signatures
            .split_whitespace()
            .filter_map(|entry| entry.split_once(','))
            .filter(|(version, _)| *version == SIGNATURE_VERSION)
            .filter_map(|(_, sig)| STANDARD.decode(sig).ok())
            .any(|sig| mac.clone().verify_slice(&sig).is_ok());

        if matched {
            Ok(())
        } else {
            Err(WebhookError::NoMatchingSignature)
        }
    }
}

// ---------------------------------------------------------------------------
// Event payloads
// ---------------------------------------------------------------------------

/// Envelope of an identity-provider event. `data` is kept raw because its
/// shape depends on `type`.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: serde_json::Value,
}

/// `data` of a `user.created` event. Only the fields mirrored into the
/// database are read.
#[derive(Debug, Deserialize)]
pub struct UserCreatedData {
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

#[derive(Debug, Deserialize)]
pub struct EmailAddress {
    pub email_address: String,
}

impl UserCreatedData {
    /// First listed email address, if any.
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .first()
            .map(|e| e.email_address.as_str())
            .filter(|e| !e.trim().is_empty())
    }
}

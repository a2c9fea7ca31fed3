//! Webhook request signatures.
//!
//! Ecwid signs each webhook with HMAC-SHA256 over `{eventCreated}.{eventId}`
//! using the application's client secret, and sends the base64-encoded MAC
//! in the `X-Ecwid-Webhook-Signature` header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::WebhookError;

/// Header carrying the signature.
pub const SIGNATURE_HEADER: &str = "X-Ecwid-Webhook-Signature";

type HmacSha256 = Hmac<Sha256>;

fn mac(secret: &str, created: i64, event_id: &str) -> Result<HmacSha256, WebhookError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| WebhookError::InvalidSecret(e.to_string()))?;
    mac.update(format!("{}.{}", created, event_id).as_bytes());
    Ok(mac)
}

/// Compute the signature Ecwid sends for an event.
pub fn sign(secret: &str, created: i64, event_id: &str) -> Result<String, WebhookError> {
    let tag = mac(secret, created, event_id)?.finalize().into_bytes();
    Ok(STANDARD.encode(tag))
}

/// Check `signature` against the expected one in constant time.
pub fn verify(
    secret: &str,
    created: i64,
    event_id: &str,
    signature: &str,
) -> Result<(), WebhookError> {
    let provided = STANDARD
        .decode(signature.trim())
        .map_err(|_| WebhookError::InvalidSignature)?;
    mac(secret, created, event_id)?
        .verify_slice(&provided)
        .map_err(|_| WebhookError::InvalidSignature)
}

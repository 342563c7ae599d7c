use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Reads the `exp` claim from a JWT-shaped token. Opaque tokens yield `None`.
pub fn decode_expiry(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    let decoded = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    value.get("exp").and_then(|v| v.as_i64())
}

pub fn is_expired(token: &str, now: DateTime<Utc>) -> bool {
    decode_expiry(token)
        .map(|exp| exp <= now.timestamp())
        .unwrap_or(false)
}

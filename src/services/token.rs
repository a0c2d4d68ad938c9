use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde_json::Value;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Usable; `None` when the token carries no expiry claim.
    Valid(Option<DateTime<Utc>>),
    Expired,
    Malformed,
}

/// Reads the `exp` claim out of a JWT-shaped token.
///
/// Only the payload segment is decoded; the signature is the server's
/// business. A token without a numeric `exp` never expires client-side.
pub fn expiry(token: &str) -> Result<Option<DateTime<Utc>>, ()> {
    let payload = token.split('.').nth(1).ok_or(())?;
    let trimmed = payload.trim_end_matches('=');

    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .map_err(|_| ())?;

    let claims: Value = serde_json::from_slice(&bytes).map_err(|_| ())?;

    let Some(exp) = claims.get("exp").and_then(Value::as_f64) else {
        return Ok(None);
    };

    let millis = (exp * 1000.0) as i64;
    Ok(DateTime::<Utc>::from_timestamp_millis(millis))
}

pub fn inspect(token: &str, now: DateTime<Utc>) -> TokenStatus {
    match expiry(token) {
        Ok(Some(expires_at)) if now >= expires_at => TokenStatus::Expired,
        Ok(expires_at) => TokenStatus::Valid(expires_at),
        Err(()) => TokenStatus::Malformed,
    }
}

//! Bearer-token session state.
//!
//! The session is an explicit value object owned by the caller, not a
//! module-level global. Expiry is read from the token's JWT `exp` claim when
//! one is present; opaque tokens are carried as-is and left for the backend
//! to reject.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// An authenticated session against the event backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    /// From the JWT `exp` claim; `None` for opaque tokens.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// Wrap a bearer token, reading expiry from its `exp` claim if it is a
    /// decodable JWT.
    pub fn from_token(access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        let expires_at = decode_exp(&access_token);
        Self {
            access_token,
            expires_at,
        }
    }

    /// Whether the token had expired at `now`.
    ///
    /// Tokens without a readable `exp` claim never expire locally.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(exp) if exp <= now)
    }

    /// Fail with [`AuthError::SessionExpired`] if the token is past expiry.
    pub fn ensure_valid(&self) -> Result<(), AuthError> {
        if self.is_expired(Utc::now()) {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }

    /// `Authorization` header value.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Pull the `exp` claim out of a JWT without verifying the signature.
///
/// Verification is the backend's job; locally we only want to log the user
/// out eagerly instead of letting a doomed request fail.
fn decode_exp(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    DateTime::from_timestamp(exp, 0)
}

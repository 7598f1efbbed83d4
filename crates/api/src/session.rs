//! Signed-cookie session identity.
//!
//! The account system issues the `ws_session` cookie at login; this module
//! only validates it and exposes the requester as an extractor. The value
//! is `user_id|hex(username)|expiry|signature` with an HMAC-SHA256
//! signature over the first three parts.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::Response;
use hmac::{Hmac, Mac};
use mongodb::bson::oid::ObjectId;
use sha2::Sha256;

use crate::cookies::parse_cookie;
use crate::flash::{self, FlashLevel};
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

const COOKIE_NAME: &str = "ws_session";
const SESSION_DURATION_SECS: i64 = 7 * 24 * 3600; // 7 days

/// Authenticated requester extracted from the signed session cookie.
///
/// Use this as an extractor parameter in any handler that stamps ownership
/// or mutates listings. Requests without a valid session are redirected to
/// `/login` with an error flash.
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// The requester's `users` document id.
    pub id: ObjectId,
    pub username: String,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if let Some(value) = parse_cookie(header, COOKIE_NAME) {
            if let Some(user) = verify_session(value, &state.config.session_secret) {
                return Ok(user);
            }
        }

        Err(flash::redirect_with(
            FlashLevel::Error,
            "You must be logged in!",
            "/login",
        ))
    }
}

/// Create a signed session value for the given user.
pub fn create_session(user_id: ObjectId, username: &str, secret: &str) -> String {
    let expiry = chrono::Utc::now().timestamp() + SESSION_DURATION_SECS;
    seal(user_id, username, expiry, secret)
}

/// Build the `Set-Cookie` header value for a fresh session.
pub fn session_cookie(user_id: ObjectId, username: &str, secret: &str) -> String {
    let value = create_session(user_id, username, secret);
    format!(
        "{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_DURATION_SECS}"
    )
}

fn seal(user_id: ObjectId, username: &str, expiry: i64, secret: &str) -> String {
    let payload = format!("{}|{}|{}", user_id.to_hex(), hex::encode(username), expiry);
    let sig = sign(&payload, secret);
    format!("{payload}|{sig}")
}

/// Verify a session cookie value. Returns the requester if valid.
fn verify_session(value: &str, secret: &str) -> Option<SessionUser> {
    let parts: Vec<&str> = value.splitn(4, '|').collect();
    if parts.len() != 4 {
        return None;
    }
    let (user_id, username_hex, expiry_str, sig) = (parts[0], parts[1], parts[2], parts[3]);

    let payload = format!("{user_id}|{username_hex}|{expiry_str}");
    let expected = sign(&payload, secret);
    if !constant_time_eq(sig.as_bytes(), expected.as_bytes()) {
        return None;
    }

    let expiry: i64 = expiry_str.parse().ok()?;
    if chrono::Utc::now().timestamp() > expiry {
        return None;
    }

    let id = ObjectId::parse_str(user_id).ok()?;
    let username = String::from_utf8(hex::decode(username_hex).ok()?).ok()?;
    Some(SessionUser { id, username })
}

fn sign(payload: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

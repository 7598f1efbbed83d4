//! One-shot flash messages carried in a cookie.
//!
//! A flash is set alongside a redirect and shown by the next rendered
//! page, which also clears it. The cookie value is `level.hex(text)` so
//! arbitrary message text survives the header grammar.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::cookies::parse_cookie;

const COOKIE_NAME: &str = "ws_flash";

/// Severity of a flash message; selects the banner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashLevel::Success),
            "error" => Some(FlashLevel::Error),
            _ => None,
        }
    }
}

/// A decoded flash message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

/// Pending flash message read from the request cookies.
///
/// Extract this in any handler that renders a page; call [`Flash::finish`]
/// with the page body so the message is cleared after being shown once.
#[derive(Debug, Default)]
pub struct Flash(Option<FlashMessage>);

impl Flash {
    /// The pending message, if any.
    pub fn message(&self) -> Option<&FlashMessage> {
        self.0.as_ref()
    }

    /// Render a page body, clearing the pending flash so it shows only once.
    pub fn finish(self, body: String) -> Response {
        let mut response = Html(body).into_response();
        if self.0.is_some() {
            response.headers_mut().append(SET_COOKIE, clear_cookie());
        }
        response
    }
}

impl<S> axum::extract::FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        Ok(Flash(parse_cookie(header, COOKIE_NAME).and_then(decode)))
    }
}

/// Issue a 303 redirect carrying a one-shot flash message.
pub fn redirect_with(level: FlashLevel, text: &str, to: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    response.headers_mut().append(SET_COOKIE, set_cookie(level, text));
    response
}

fn encode(level: FlashLevel, text: &str) -> String {
    format!("{}.{}", level.as_str(), hex::encode(text))
}

fn decode(value: &str) -> Option<FlashMessage> {
    let (level, hex_text) = value.split_once('.')?;
    let level = FlashLevel::parse(level)?;
    let text = String::from_utf8(hex::decode(hex_text).ok()?).ok()?;
    Some(FlashMessage { level, text })
}

fn set_cookie(level: FlashLevel, text: &str) -> HeaderValue {
    let cookie = format!(
        "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
        encode(level, text)
    );
    HeaderValue::from_str(&cookie).expect("flash cookie is valid ASCII")
}

fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static(
        "ws_flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_value_round_trips() {
        let value = encode(FlashLevel::Success, "New listing created!");
        let decoded = decode(&value).unwrap();
        assert_eq!(decoded.level, FlashLevel::Success);
        assert_eq!(decoded.text, "New listing created!");
    }

    #[test]
    fn garbage_values_decode_to_none() {
        assert_eq!(decode("no-separator"), None);
        assert_eq!(decode("warn.68656c6c6f"), None);
        assert_eq!(decode("error.zzzz"), None);
    }

    #[test]
    fn redirect_sets_cookie_and_location() {
        let response = redirect_with(FlashLevel::Error, "nope", "/listings");
        assert_eq!(response.status(), axum::http::StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/listings");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("ws_flash=error."));
    }

    #[test]
    fn finish_clears_a_pending_flash() {
        let flash = Flash(Some(FlashMessage {
            level: FlashLevel::Success,
            text: "done".to_string(),
        }));
        let response = flash.finish("<p>page</p>".to_string());
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn finish_without_flash_sets_no_cookie() {
        let response = Flash(None).finish("<p>page</p>".to_string());
        assert!(response.headers().get(SET_COOKIE).is_none());
    }
}

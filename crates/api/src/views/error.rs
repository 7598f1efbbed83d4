//! Generic error page.

use axum::http::StatusCode;

use crate::views::layout::{self, escape_html};

/// Render the error page for a status code and message.
pub fn page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "<h1>{title}</h1>\n<p>{}</p>\n<p><a href=\"/listings\">Back to listings</a></p>",
        escape_html(message)
    );
    layout::page(&title, None, &body)
}

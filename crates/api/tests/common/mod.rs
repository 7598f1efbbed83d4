//! Shared helpers for the HTTP-level integration tests.
//!
//! Mirrors the app assembly in `wanderstay_api::app` so tests exercise
//! the same middleware stack (method override, request ID, timeout,
//! tracing, panic recovery) that production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use mongodb::Client;
use tower::ServiceExt;

use wanderstay_api::app::{self, App};
use wanderstay_api::config::ServerConfig;
use wanderstay_api::session;
use wanderstay_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig`; uploads land in a caller-provided temp
/// directory and the MongoDB timeouts are short so nothing blocks when
/// no server is running.
pub fn test_config(upload_dir: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url:
            "mongodb://127.0.0.1:27017/?serverSelectionTimeoutMS=200&connectTimeoutMS=200"
                .to_string(),
        database_name: "wanderstay_test".to_string(),
        session_secret: TEST_SECRET.to_string(),
        upload_dir: upload_dir.to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application with all middleware layers.
///
/// The MongoDB client connects lazily and is never contacted by the
/// request paths these tests exercise.
pub async fn build_test_app(upload_dir: &str) -> App {
    let config = test_config(upload_dir);
    let client = Client::with_uri_str(&config.database_url)
        .await
        .expect("parse test MongoDB URI");
    let db = client.database(&config.database_name);
    app::build(AppState {
        db,
        config: Arc::new(config),
    })
}

/// A `Cookie` header value carrying a signed session for the given user.
pub fn session_cookie_for(user_id: ObjectId, username: &str) -> String {
    format!(
        "ws_session={}",
        session::create_session(user_id, username, TEST_SECRET)
    )
}

/// Send a GET request, optionally with a `Cookie` header.
pub async fn get(app: App, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a multipart POST, optionally with a `Cookie` header.
pub async fn post_multipart(
    app: App,
    path: &str,
    cookie: Option<&str>,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Response {
    const BOUNDARY: &str = "test-boundary-7d9f1a";
    let body = multipart_body(BOUNDARY, fields, file);

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Encode a `multipart/form-data` body with text fields and at most one
/// file part.
pub fn multipart_body(
    boundary: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

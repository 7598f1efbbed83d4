//! Application assembly shared by the binary entrypoint and the
//! integration tests, so both exercise the same middleware stack.

use std::time::Duration;

use axum::extract::Request;
use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware::override_method;
use crate::routes;
use crate::state::AppState;

/// The composed application service: the method-override rewrite in front
/// of the routed middleware stack.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the application.
///
/// The method-override rewrite sits outside the router because routing
/// dispatches on the verb; layers added with `Router::layer` only run
/// after the route has been matched.
pub fn build(state: AppState) -> App {
    let request_id_header = HeaderName::from_static("x-request-id");

    let router = Router::new()
        .merge(routes::health::router())
        .merge(routes::listings::router())
        // Stored listing images.
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state);

    MapRequestLayer::new(override_method as fn(Request) -> Request).layer(router)
}

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount the listing routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/listings",
            get(handlers::listings::index).post(handlers::listings::create),
        )
        .route("/listings/new", get(handlers::listings::new_form))
        .route(
            "/listings/{id}",
            get(handlers::listings::show)
                .put(handlers::listings::update)
                .patch(handlers::listings::update)
                .delete(handlers::listings::destroy),
        )
        .route("/listings/{id}/edit", get(handlers::listings::edit_form))
}

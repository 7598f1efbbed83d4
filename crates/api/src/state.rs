use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the database handle is reference-counted
/// internally, the config is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// MongoDB database handle.
    pub db: mongodb::Database,
    /// Server configuration (session secret, upload directory).
    pub config: Arc<ServerConfig>,
}

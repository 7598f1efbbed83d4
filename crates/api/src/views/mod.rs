//! Server-rendered HTML views.
//!
//! Render functions return complete page markup as `String`; handlers wrap
//! them in [`axum::response::Html`] via `Flash::finish`.

pub mod error;
pub mod layout;
pub mod listings;

//! Request handlers.
//!
//! Each submodule covers one resource. Handlers delegate persistence to
//! the repositories in `wanderstay_db` and resolve to exactly one response
//! action: a rendered page or a redirect.

pub mod listings;

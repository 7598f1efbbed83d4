//! Route builders.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                      service + database health (JSON)
//!
//! /listings                    index (GET), create (POST)
//! /listings/new                new-listing form (GET)
//! /listings/{id}               detail (GET), update (PUT/PATCH), delete (DELETE)
//! /listings/{id}/edit          edit form (GET)
//!
//! /uploads/*                   stored listing images (static files)
//! ```

pub mod health;
pub mod listings;

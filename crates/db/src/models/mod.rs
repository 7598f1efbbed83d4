//! Document models and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` document struct matching the stored shape
//! - DTOs for inserts and updates where the collection is written to

pub mod listing;
pub mod review;
pub mod user;

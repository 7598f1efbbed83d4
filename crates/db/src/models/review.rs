//! Review documents. Written by the review subsystem, read here for
//! population and removed when their listing is deleted.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use wanderstay_core::types::Timestamp;

/// A document in the `reviews` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub comment: String,
    pub rating: i32,
    /// Reference to the `users` document of the reviewer.
    pub author: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
}

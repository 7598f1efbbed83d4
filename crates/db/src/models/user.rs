//! User documents. Written by the account system, read here for
//! ownership stamping and population.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A document in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
}

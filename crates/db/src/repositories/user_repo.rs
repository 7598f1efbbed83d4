//! Read-only repository for the `users` collection.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::models::user::User;

const COLLECTION: &str = "users";

/// Lookups used for ownership checks and population.
pub struct UserRepo;

impl UserRepo {
    fn collection(db: &Database) -> Collection<User> {
        db.collection(COLLECTION)
    }

    /// Find a user by id.
    pub async fn find_by_id(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<User>, mongodb::error::Error> {
        Self::collection(db).find_one(doc! { "_id": id }).await
    }

    /// Find all users whose ids appear in `ids`. Order is unspecified.
    pub async fn find_by_ids(
        db: &Database,
        ids: &[ObjectId],
    ) -> Result<Vec<User>, mongodb::error::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Self::collection(db)
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?
            .try_collect()
            .await
    }
}

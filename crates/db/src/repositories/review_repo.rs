//! Repository for the `reviews` collection.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::models::review::Review;

const COLLECTION: &str = "reviews";

/// Lookups and cascade removal for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    fn collection(db: &Database) -> Collection<Review> {
        db.collection(COLLECTION)
    }

    /// Find all reviews whose ids appear in `ids`. Order is unspecified;
    /// callers that care reorder against the listing's reference list.
    pub async fn find_by_ids(
        db: &Database,
        ids: &[ObjectId],
    ) -> Result<Vec<Review>, mongodb::error::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Self::collection(db)
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?
            .try_collect()
            .await
    }

    /// Delete every review whose id appears in `ids`, returning the count
    /// removed.
    pub async fn delete_many(
        db: &Database,
        ids: &[ObjectId],
    ) -> Result<u64, mongodb::error::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = Self::collection(db)
            .delete_many(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        Ok(result.deleted_count)
    }
}

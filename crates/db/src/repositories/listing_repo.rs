//! Repository for the `listings` collection.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_bson};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::models::listing::{
    Listing, NewListing, PopulatedListing, PopulatedReview, UpdateListing,
};
use crate::models::review::Review;
use crate::repositories::{ReviewRepo, UserRepo};

const COLLECTION: &str = "listings";

/// Provides CRUD operations for listings.
pub struct ListingRepo;

impl ListingRepo {
    fn collection(db: &Database) -> Collection<Listing> {
        db.collection(COLLECTION)
    }

    /// Insert a new listing, returning the created document.
    pub async fn create(db: &Database, input: NewListing) -> Result<Listing, mongodb::error::Error> {
        let listing = Listing {
            id: ObjectId::new(),
            title: input.title,
            description: input.description,
            image: Some(input.image),
            price: input.price,
            location: input.location,
            country: input.country,
            owner: input.owner,
            reviews: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        Self::collection(db).insert_one(&listing).await?;
        Ok(listing)
    }

    /// List every listing, newest first. No filter, no pagination.
    pub async fn find_all(db: &Database) -> Result<Vec<Listing>, mongodb::error::Error> {
        Self::collection(db)
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await
    }

    /// Find a listing by its id.
    pub async fn find_by_id(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<Listing>, mongodb::error::Error> {
        Self::collection(db).find_one(doc! { "_id": id }).await
    }

    /// Find a listing with its owner, reviews, and review authors resolved.
    ///
    /// References are looked up at read time; review order follows the
    /// listing's `reviews` array, not insertion order in the collection.
    pub async fn find_populated(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<PopulatedListing>, mongodb::error::Error> {
        let Some(listing) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };

        let owner = UserRepo::find_by_id(db, listing.owner).await?;

        let reviews = ReviewRepo::find_by_ids(db, &listing.reviews).await?;
        let reviews = order_reviews(reviews, &listing.reviews);

        let author_ids: Vec<ObjectId> = reviews.iter().map(|r| r.author).collect();
        let authors = UserRepo::find_by_ids(db, &author_ids).await?;

        let reviews = reviews
            .into_iter()
            .map(|review| {
                let author = authors.iter().find(|u| u.id == review.author).cloned();
                PopulatedReview { review, author }
            })
            .collect();

        Ok(Some(PopulatedListing {
            listing,
            owner,
            reviews,
        }))
    }

    /// Overwrite a listing's fields, returning the updated document.
    ///
    /// `image` is only rewritten when the DTO carries a replacement.
    /// Returns `None` if no document with the given id exists; `owner`,
    /// `reviews`, and `created_at` are never touched.
    pub async fn update(
        db: &Database,
        id: ObjectId,
        input: &UpdateListing,
    ) -> Result<Option<Listing>, mongodb::error::Error> {
        let mut set = doc! {
            "title": &input.title,
            "description": &input.description,
            "price": input.price,
            "location": &input.location,
            "country": &input.country,
        };
        if let Some(image) = &input.image {
            set.insert("image", to_bson(image)?);
        }
        Self::collection(db)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
    }

    /// Delete a listing and the review documents it references.
    ///
    /// Returns `true` if a listing was removed. Deleting an absent id is
    /// a no-op.
    pub async fn delete(db: &Database, id: ObjectId) -> Result<bool, mongodb::error::Error> {
        let Some(listing) = Self::collection(db)
            .find_one_and_delete(doc! { "_id": id })
            .await?
        else {
            return Ok(false);
        };

        if !listing.reviews.is_empty() {
            let removed = ReviewRepo::delete_many(db, &listing.reviews).await?;
            tracing::debug!(listing_id = %id, removed, "removed reviews of deleted listing");
        }
        Ok(true)
    }
}

/// Reorder fetched reviews to match the reference order stored on the
/// listing. Ids absent from the reference list sort last.
fn order_reviews(mut reviews: Vec<Review>, order: &[ObjectId]) -> Vec<Review> {
    let position = |id: &ObjectId| order.iter().position(|o| o == id).unwrap_or(usize::MAX);
    reviews.sort_by_key(|r| position(&r.id));
    reviews
}

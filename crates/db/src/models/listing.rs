//! Listing documents and DTOs.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use wanderstay_core::types::Timestamp;

use crate::models::review::Review;
use crate::models::user::User;

/// A document in the `listings` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    /// Stored upload reference. Present after creation; preserved on
    /// updates that do not supply a new file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ListingImage>,
    pub price: i64,
    pub location: String,
    pub country: String,
    /// Reference to the `users` document of the creator. Set once, at
    /// creation, never rewritten.
    pub owner: ObjectId,
    /// Ordered references into the `reviews` collection.
    #[serde(default)]
    pub reviews: Vec<ObjectId>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: Timestamp,
}

/// The stored-upload reference embedded in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingImage {
    pub url: String,
    pub filename: String,
}

/// DTO for inserting a new listing.
///
/// `owner` comes from the session identity and `image` from the stored
/// upload; neither is client-controlled.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub country: String,
    pub owner: ObjectId,
    pub image: ListingImage,
}

/// DTO for updating an existing listing.
///
/// All form fields are applied as a full overwrite; `image` is only
/// replaced when a new upload accompanied the request.
#[derive(Debug, Clone)]
pub struct UpdateListing {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub country: String,
    pub image: Option<ListingImage>,
}

/// A listing with its references resolved for display.
#[derive(Debug, Clone)]
pub struct PopulatedListing {
    pub listing: Listing,
    /// `None` if the owning user document has been removed.
    pub owner: Option<User>,
    pub reviews: Vec<PopulatedReview>,
}

/// A review with its author reference resolved.
#[derive(Debug, Clone)]
pub struct PopulatedReview {
    pub review: Review,
    pub author: Option<User>,
}

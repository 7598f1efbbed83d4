//! Handlers for the `/listings` resource.

use axum::extract::{Multipart, Path, State};
use axum::response::Response;
use mongodb::bson::oid::ObjectId;
use wanderstay_core::error::CoreError;
use wanderstay_db::models::listing::{ListingImage, NewListing, UpdateListing};
use wanderstay_db::repositories::ListingRepo;

use crate::error::{AppError, AppResult};
use crate::flash::{self, Flash, FlashLevel};
use crate::forms;
use crate::session::SessionUser;
use crate::state::AppState;
use crate::uploads::UploadStore;
use crate::views;

const MISSING_LISTING: &str = "The listing you requested does not exist!";
const NOT_OWNER: &str = "You do not have permission to modify this listing!";

/// GET /listings
pub async fn index(State(state): State<AppState>, flash: Flash) -> AppResult<Response> {
    let listings = ListingRepo::find_all(&state.db).await?;
    let body = views::listings::index(&listings, flash.message());
    Ok(flash.finish(body))
}

/// GET /listings/new
pub async fn new_form(_user: SessionUser, flash: Flash) -> Response {
    let body = views::listings::new_form(flash.message());
    flash.finish(body)
}

/// GET /listings/{id}
///
/// An id that parses to no record (or does not parse at all) resolves to
/// a single error-flash redirect back to the index; nothing is rendered
/// on that path.
pub async fn show(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(missing_listing_redirect());
    };
    let Some(populated) = ListingRepo::find_populated(&state.db, id).await? else {
        return Ok(missing_listing_redirect());
    };
    let body = views::listings::show(&populated, flash.message());
    Ok(flash.finish(body))
}

/// POST /listings
///
/// Requires a session and an uploaded image file. The owner is stamped
/// from the session identity, never from the payload.
pub async fn create(
    State(state): State<AppState>,
    user: SessionUser,
    multipart: Multipart,
) -> AppResult<Response> {
    let store = UploadStore::new(&state.config.upload_dir);
    let mut form = forms::parse_listing_form(multipart, &store).await?;

    let image = form
        .image
        .take()
        .ok_or_else(|| CoreError::Validation("an image file is required".to_string()))?;

    let listing = ListingRepo::create(
        &state.db,
        NewListing {
            title: form.title,
            description: form.description,
            price: form.price,
            location: form.location,
            country: form.country,
            owner: user.id,
            image: ListingImage {
                url: image.url,
                filename: image.filename,
            },
        },
    )
    .await?;

    tracing::info!(listing_id = %listing.id, owner = %user.id, "listing created");
    Ok(flash::redirect_with(
        FlashLevel::Success,
        "New listing created!",
        "/listings",
    ))
}

/// GET /listings/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    user: SessionUser,
    flash: Flash,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(missing_listing_redirect());
    };
    let Some(listing) = ListingRepo::find_by_id(&state.db, id).await? else {
        return Ok(missing_listing_redirect());
    };
    if listing.owner != user.id {
        return Ok(not_owner_redirect(id));
    }
    let body = views::listings::edit_form(&listing, flash.message());
    Ok(flash.finish(body))
}

/// PUT/PATCH /listings/{id}
///
/// Fails with a not-found error before any mutation when the id has no
/// record; a supplied file replaces the image, otherwise the stored one
/// is preserved.
pub async fn update(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Response> {
    let oid = parse_id(&id).ok_or_else(|| not_found(&id))?;
    let existing = ListingRepo::find_by_id(&state.db, oid)
        .await?
        .ok_or_else(|| not_found(&id))?;
    if existing.owner != user.id {
        return Ok(not_owner_redirect(oid));
    }

    let store = UploadStore::new(&state.config.upload_dir);
    let form = forms::parse_listing_form(multipart, &store).await?;

    let update = UpdateListing {
        title: form.title,
        description: form.description,
        price: form.price,
        location: form.location,
        country: form.country,
        image: form.image.map(|f| ListingImage {
            url: f.url,
            filename: f.filename,
        }),
    };

    // A concurrent delete between the ownership check and here surfaces
    // as not-found rather than a silent no-op.
    ListingRepo::update(&state.db, oid, &update)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(listing_id = %oid, "listing updated");
    Ok(flash::redirect_with(
        FlashLevel::Success,
        "Listing updated!",
        &format!("/listings/{}", oid.to_hex()),
    ))
}

/// DELETE /listings/{id}
///
/// Deleting an id with no record is a no-op that still reports success.
pub async fn destroy(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if let Some(oid) = parse_id(&id) {
        if let Some(existing) = ListingRepo::find_by_id(&state.db, oid).await? {
            if existing.owner != user.id {
                return Ok(not_owner_redirect(oid));
            }
            ListingRepo::delete(&state.db, oid).await?;
            tracing::info!(listing_id = %oid, "listing deleted");
        }
    }
    Ok(flash::redirect_with(
        FlashLevel::Success,
        "Listing deleted!",
        "/listings",
    ))
}

fn parse_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Listing",
        id: id.to_string(),
    })
}

fn missing_listing_redirect() -> Response {
    flash::redirect_with(FlashLevel::Error, MISSING_LISTING, "/listings")
}

fn not_owner_redirect(id: ObjectId) -> Response {
    flash::redirect_with(
        FlashLevel::Error,
        NOT_OWNER,
        &format!("/listings/{}", id.to_hex()),
    )
}

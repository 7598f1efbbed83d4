//! Typed listing payload parsed from multipart form bodies.
//!
//! Field names form an allow-list; a submission carrying anything else is
//! rejected with a validation error instead of being merged wholesale.

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use validator::Validate;
use wanderstay_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::uploads::{StoredFile, UploadStore};

/// Fields accepted from the new/edit listing forms.
#[derive(Debug, Default, Validate)]
pub struct ListingForm {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
    /// Stored upload, when the form carried a file.
    pub image: Option<StoredFile>,
}

/// Consume a multipart body into a validated [`ListingForm`].
///
/// A file part is persisted through `store` as soon as it is read; an
/// empty file part (browsers send one when no file was chosen) leaves
/// `image` unset. Whether `image` is required is the caller's call.
pub async fn parse_listing_form(
    mut multipart: Multipart,
    store: &UploadStore,
) -> AppResult<ListingForm> {
    let mut form = ListingForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            return Err(CoreError::Validation("unnamed form field".into()).into());
        };

        match name.as_str() {
            "title" => form.title = text(field).await?,
            "description" => form.description = text(field).await?,
            "price" => form.price = parse_price(&text(field).await?)?,
            "location" => form.location = text(field).await?,
            "country" => form.country = text(field).await?,
            "image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if filename.is_empty() || data.is_empty() {
                    continue;
                }
                form.image = Some(store.save(&filename, &data).await?);
            }
            other => {
                return Err(CoreError::Validation(format!("unknown field {other:?}")).into());
            }
        }
    }

    form.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    Ok(form)
}

async fn text(field: Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

fn parse_price(raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("price must be a whole number, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ListingForm {
        ListingForm {
            title: "Seaside cabin".to_string(),
            description: String::new(),
            price: 120,
            location: "Bergen".to_string(),
            country: "Norway".to_string(),
            image: None,
        }
    }

    #[test]
    fn filled_form_validates() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let form = ListingForm {
            title: String::new(),
            ..filled_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let form = ListingForm {
            price: -5,
            ..filled_form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn price_parsing_accepts_digits_and_rejects_the_rest() {
        assert_eq!(parse_price("120").unwrap(), 120);
        assert_eq!(parse_price(" 7 ").unwrap(), 7);
        assert!(parse_price("12.50").is_err());
        assert!(parse_price("cheap").is_err());
    }
}

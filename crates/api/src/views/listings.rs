//! Listing pages: index, detail, and the new/edit forms.

use wanderstay_db::models::listing::{Listing, PopulatedListing};

use crate::flash::FlashMessage;
use crate::views::layout::{escape_html, page};

/// The index page: every listing, title linking to its detail page.
pub fn index(listings: &[Listing], flash: Option<&FlashMessage>) -> String {
    let items: String = listings
        .iter()
        .map(|l| {
            format!(
                "<li><a href=\"/listings/{id}\">{title}</a> — {location}, {country} — €{price}/night</li>\n",
                id = l.id.to_hex(),
                title = escape_html(&l.title),
                location = escape_html(&l.location),
                country = escape_html(&l.country),
                price = l.price,
            )
        })
        .collect();

    let body = format!("<h1>All listings</h1>\n<ul class=\"listings\">\n{items}</ul>");
    page("Listings", flash, &body)
}

/// The detail page: one listing with owner and reviews populated.
pub fn show(populated: &PopulatedListing, flash: Option<&FlashMessage>) -> String {
    let listing = &populated.listing;
    let id = listing.id.to_hex();

    let image = listing
        .image
        .as_ref()
        .map(|img| {
            format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                escape_html(&img.url),
                escape_html(&listing.title)
            )
        })
        .unwrap_or_default();

    let owner = populated
        .owner
        .as_ref()
        .map(|u| escape_html(&u.username))
        .unwrap_or_else(|| "unknown host".to_string());

    let reviews: String = populated
        .reviews
        .iter()
        .map(|r| {
            let author = r
                .author
                .as_ref()
                .map(|u| escape_html(&u.username))
                .unwrap_or_else(|| "anonymous".to_string());
            format!(
                "<li><strong>{author}</strong> rated {rating}/5: {comment}</li>\n",
                rating = r.review.rating,
                comment = escape_html(&r.review.comment),
            )
        })
        .collect();

    let body = format!(
        "<h1>{title}</h1>\n{image}<p>{description}</p>\n\
         <p>{location}, {country} — €{price}/night</p>\n\
         <p>Hosted by {owner}</p>\n\
         <h2>Reviews</h2>\n<ul class=\"reviews\">\n{reviews}</ul>\n\
         <a href=\"/listings/{id}/edit\">Edit</a>\n\
         <form method=\"post\" action=\"/listings/{id}?_method=DELETE\">\n\
         <button type=\"submit\">Delete</button>\n</form>",
        title = escape_html(&listing.title),
        description = escape_html(&listing.description),
        location = escape_html(&listing.location),
        country = escape_html(&listing.country),
        price = listing.price,
    );
    page(&listing.title, flash, &body)
}

/// The new-listing form.
pub fn new_form(flash: Option<&FlashMessage>) -> String {
    let body = format!(
        "<h1>Add a listing</h1>\n\
         <form method=\"post\" action=\"/listings\" enctype=\"multipart/form-data\">\n{fields}\
         <button type=\"submit\">Create</button>\n</form>",
        fields = form_fields(None),
    );
    page("New listing", flash, &body)
}

/// The edit form, prefilled from the current record.
pub fn edit_form(listing: &Listing, flash: Option<&FlashMessage>) -> String {
    let body = format!(
        "<h1>Edit {title}</h1>\n\
         <form method=\"post\" action=\"/listings/{id}?_method=PUT\" enctype=\"multipart/form-data\">\n{fields}\
         <button type=\"submit\">Update</button>\n</form>",
        title = escape_html(&listing.title),
        id = listing.id.to_hex(),
        fields = form_fields(Some(listing)),
    );
    page("Edit listing", flash, &body)
}

/// Input fields shared by the new and edit forms. `current` prefills the
/// edit variant; the file input is optional there since the stored image
/// is preserved when no new file is chosen.
fn form_fields(current: Option<&Listing>) -> String {
    let title = current.map(|l| escape_html(&l.title)).unwrap_or_default();
    let description = current
        .map(|l| escape_html(&l.description))
        .unwrap_or_default();
    let location = current.map(|l| escape_html(&l.location)).unwrap_or_default();
    let country = current.map(|l| escape_html(&l.country)).unwrap_or_default();
    let price = current.map(|l| l.price.to_string()).unwrap_or_default();
    let image_required = if current.is_none() { " required" } else { "" };

    format!(
        "<label>Title <input name=\"title\" value=\"{title}\" required></label>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\n\
         <label>Price <input name=\"price\" type=\"number\" min=\"0\" value=\"{price}\" required></label>\n\
         <label>Location <input name=\"location\" value=\"{location}\" required></label>\n\
         <label>Country <input name=\"country\" value=\"{country}\" required></label>\n\
         <label>Image <input name=\"image\" type=\"file\"{image_required}></label>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use wanderstay_db::models::listing::ListingImage;

    fn listing(title: &str) -> Listing {
        Listing {
            id: ObjectId::new(),
            title: title.to_string(),
            description: "desc".to_string(),
            image: Some(ListingImage {
                url: "/uploads/x.jpg".to_string(),
                filename: "x.jpg".to_string(),
            }),
            price: 80,
            location: "Porto".to_string(),
            country: "Portugal".to_string(),
            owner: ObjectId::new(),
            reviews: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn index_links_each_listing() {
        let listings = vec![listing("Cabin"), listing("Loft")];
        let html = index(&listings, None);
        assert!(html.contains("Cabin"));
        assert!(html.contains("Loft"));
        assert!(html.contains(&format!("/listings/{}", listings[0].id.to_hex())));
    }

    #[test]
    fn index_escapes_titles() {
        let html = index(&[listing("<b>bold</b>")], None);
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn show_renders_owner_reviews_and_delete_form() {
        let l = listing("Cabin");
        let id = l.id.to_hex();
        let populated = PopulatedListing {
            listing: l,
            owner: None,
            reviews: Vec::new(),
        };
        let html = show(&populated, None);
        assert!(html.contains("unknown host"));
        assert!(html.contains(&format!("/listings/{id}?_method=DELETE")));
        assert!(html.contains(&format!("/listings/{id}/edit")));
    }

    #[test]
    fn new_form_requires_an_image_file() {
        let html = new_form(None);
        assert!(html.contains("name=\"image\" type=\"file\" required"));
    }

    #[test]
    fn edit_form_prefills_and_makes_image_optional() {
        let l = listing("Cabin");
        let html = edit_form(&l, None);
        assert!(html.contains("value=\"Cabin\""));
        assert!(html.contains(&format!("/listings/{}?_method=PUT", l.id.to_hex())));
        assert!(!html.contains("type=\"file\" required"));
    }
}

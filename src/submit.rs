//! Listing submission: validate, upload images, then post the listing.
//!
//! The flow is sequential and non-transactional. Every image must upload
//! before the listing is created; the first upload failure aborts the
//! whole submission, so no partial listing ever exists. Images already
//! uploaded when a later one fails are not deleted — the storage service
//! has no delete API, and the backend tolerates unreferenced files.

use tracing::{debug, info};

use crate::api::{ApiClient, ApiError};
use crate::models::{governorates, NewProduct, Product};
use crate::upload::UploadClient;

/// An image selected for a listing, already read into memory
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub filename: String,
    pub mimetype: String,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    pub fn jpeg(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mimetype: "image/jpeg".to_string(),
            bytes,
        }
    }
}

/// Field checks applied before any request is issued
pub fn validate_listing(listing: &NewProduct) -> Result<(), ApiError> {
    if listing.name.trim().is_empty() {
        return Err(ApiError::Validation("listing name is required".to_string()));
    }
    if listing.phone.trim().is_empty() {
        return Err(ApiError::Validation("contact phone is required".to_string()));
    }
    if listing.price < 0.0 {
        return Err(ApiError::Validation(
            "price cannot be negative".to_string(),
        ));
    }
    let city = listing.city.as_deref().unwrap_or("");
    if !governorates::is_valid_pair(&listing.governorate, city) {
        return Err(ApiError::Validation(format!(
            "unknown governorate/city: {} / {}",
            listing.governorate, city
        )));
    }
    Ok(())
}

/// Submit a new listing: validate, upload every image in order, then
/// create the listing with the uploaded URLs embedded.
pub async fn submit_listing(
    api: &ApiClient,
    uploader: &UploadClient,
    mut listing: NewProduct,
    images: Vec<ImageAsset>,
) -> Result<Product, ApiError> {
    validate_listing(&listing)?;

    let mut urls = Vec::with_capacity(images.len());
    for image in images {
        // any failure here aborts before the listing POST
        let url = uploader
            .upload_image(&image.filename, &image.mimetype, image.bytes)
            .await?;
        debug!(filename = %image.filename, %url, "image uploaded");
        urls.push(url);
    }

    listing.images = urls;
    let product = api.create_product(&listing).await?;
    info!(id = %product.id, "listing submitted");
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductType;

    fn listing() -> NewProduct {
        NewProduct {
            name: "500W panel".to_string(),
            phone: "+967700000000".to_string(),
            price: 150.0,
            product_type: Some(ProductType::Panel),
            governorate: "Aden".to_string(),
            city: Some("Crater".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_listing_passes() {
        assert!(validate_listing(&listing()).is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut bad = listing();
        bad.price = -1.0;
        assert!(matches!(
            validate_listing(&bad),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn mismatched_city_is_rejected() {
        let mut bad = listing();
        bad.city = Some("Zinjibar".to_string());
        assert!(matches!(
            validate_listing(&bad),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut bad = listing();
        bad.name = "  ".to_string();
        assert!(matches!(
            validate_listing(&bad),
            Err(ApiError::Validation(_))
        ));
    }
}

//! The submit flow against mocked storage and marketplace backends: images
//! upload in order, and an upload failure aborts before the listing POST.

use httpmock::prelude::*;
use serde_json::json;

use qafzh_market::api::ApiClient;
use qafzh_market::models::{NewProduct, ProductType};
use qafzh_market::submit::{submit_listing, ImageAsset};
use qafzh_market::upload::UploadClient;

fn listing() -> NewProduct {
    NewProduct {
        name: "3kW inverter".to_string(),
        phone: "+967700000000".to_string(),
        price: 420.0,
        product_type: Some(ProductType::Inverter),
        governorate: "Aden".to_string(),
        city: Some("Crater".to_string()),
        ..Default::default()
    }
}

fn created_body() -> serde_json::Value {
    json!({
        "status": 201,
        "message": "created",
        "data": {
            "_id": "p-new",
            "name": "3kW inverter",
            "type": "Inverter",
            "price": 420.0,
            "currency": "YER",
            "phone": "+967700000000",
            "governorate": "Aden",
            "images": ["https://cdn.example/a.jpg", "https://cdn.example/b.jpg"]
        }
    })
}

#[tokio::test]
async fn uploaded_urls_are_embedded_in_the_listing_post() {
    let storage = MockServer::start_async().await;
    let upload_a = storage.mock(|when, then| {
        when.method(POST)
            .path("/storage/upload")
            .header("x-api-key", "key-1")
            .body_contains("a.jpg");
        then.status(200)
            .json_body(json!({ "fileUrl": "https://cdn.example/a.jpg" }));
    });
    let upload_b = storage.mock(|when, then| {
        when.method(POST)
            .path("/storage/upload")
            .body_contains("b.jpg");
        then.status(200)
            .json_body(json!({ "fileUrl": "https://cdn.example/b.jpg" }));
    });

    let backend = MockServer::start_async().await;
    let create = backend.mock(|when, then| {
        when.method(POST)
            .path("/products/post")
            .body_contains("https://cdn.example/a.jpg")
            .body_contains("https://cdn.example/b.jpg");
        then.status(201).json_body(created_body());
    });

    let api = ApiClient::new(backend.base_url()).unwrap();
    let uploader = UploadClient::new(storage.url("/storage/upload"), "key-1").unwrap();

    let images = vec![
        ImageAsset::jpeg("a.jpg", vec![0xff, 0xd8, 0xff]),
        ImageAsset::jpeg("b.jpg", vec![0xff, 0xd8, 0xfe]),
    ];
    let product = submit_listing(&api, &uploader, listing(), images)
        .await
        .unwrap();

    assert_eq!(product.id, "p-new");
    assert_eq!(product.images.len(), 2);
    upload_a.assert();
    upload_b.assert();
    create.assert();
}

#[tokio::test]
async fn a_failed_upload_aborts_before_the_listing_is_created() {
    let storage = MockServer::start_async().await;
    storage.mock(|when, then| {
        when.method(POST)
            .path("/storage/upload")
            .body_contains("a.jpg");
        then.status(200)
            .json_body(json!({ "fileUrl": "https://cdn.example/a.jpg" }));
    });
    storage.mock(|when, then| {
        when.method(POST)
            .path("/storage/upload")
            .body_contains("b.jpg");
        then.status(500).json_body(json!({ "message": "storage full" }));
    });

    let backend = MockServer::start_async().await;
    let create = backend.mock(|when, then| {
        when.method(POST).path("/products/post");
        then.status(201).json_body(created_body());
    });

    let api = ApiClient::new(backend.base_url()).unwrap();
    let uploader = UploadClient::new(storage.url("/storage/upload"), "key-1").unwrap();

    let images = vec![
        ImageAsset::jpeg("a.jpg", vec![1, 2, 3]),
        ImageAsset::jpeg("b.jpg", vec![4, 5, 6]),
    ];
    let err = submit_listing(&api, &uploader, listing(), images)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    // no listing was created for the half-uploaded set
    create.assert_hits(0);
}

#[tokio::test]
async fn an_invalid_listing_sends_no_requests_at_all() {
    let storage = MockServer::start_async().await;
    let upload = storage.mock(|when, then| {
        when.method(POST).path("/storage/upload");
        then.status(200)
            .json_body(json!({ "fileUrl": "https://cdn.example/a.jpg" }));
    });

    let api = ApiClient::new("http://127.0.0.1:1").unwrap();
    let uploader = UploadClient::new(storage.url("/storage/upload"), "key-1").unwrap();

    let mut bad = listing();
    bad.price = -5.0;
    let err = submit_listing(&api, &uploader, bad, vec![ImageAsset::jpeg("a.jpg", vec![1])])
        .await
        .unwrap_err();

    assert!(matches!(err, qafzh_market::ApiError::Validation(_)));
    upload.assert_hits(0);
}

#[tokio::test]
async fn oversized_images_are_rejected_client_side() {
    let storage = MockServer::start_async().await;
    let upload = storage.mock(|when, then| {
        when.method(POST).path("/storage/upload");
        then.status(200)
            .json_body(json!({ "fileUrl": "https://cdn.example/big.jpg" }));
    });

    let uploader = UploadClient::new(storage.url("/storage/upload"), "key-1").unwrap();
    let oversized = vec![0u8; qafzh_market::upload::MAX_UPLOAD_BYTES + 1];
    let err = uploader
        .upload_image("big.jpg", "image/jpeg", oversized)
        .await
        .unwrap_err();

    assert!(matches!(err, qafzh_market::ApiError::Validation(_)));
    upload.assert_hits(0);
}

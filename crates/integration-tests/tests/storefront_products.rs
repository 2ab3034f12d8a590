//! Integration tests for the product listing, detail, and feed endpoints.
//!
//! Run with: cargo test -p storybound-integration-tests

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use storybound_integration_tests::storefront_app;

/// Test helper: GET a path and return the status with the raw body.
async fn get(path: &str) -> (StatusCode, String) {
    let response = storefront_app()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

/// Test helper: GET a path and parse the body as JSON.
async fn get_json(path: &str) -> (StatusCode, Value) {
    let (status, body) = get(path).await;
    let json = serde_json::from_str(&body).expect("parse JSON body");
    (status, json)
}

// ============================================================================
// Home & Feed Tests
// ============================================================================

#[tokio::test]
async fn test_home_redirects_to_listing() {
    let response = storefront_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .expect("Location header"),
        "/products"
    );
}

#[tokio::test]
async fn test_catalog_feed_serves_the_wire_layout() {
    let (status, body) = get_json("/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().expect("JSON array");
    assert_eq!(products.len(), 5);

    let first = &products[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Classic White Sneakers");
    assert_eq!(first["price_in_cents"], 298_000);
    assert!(first["image_url"].as_str().expect("image_url").ends_with(".jpg"));
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_listing_returns_every_story_card() {
    let (status, body) = get_json("/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["sort"], "popular");
    assert_eq!(body["products"].as_array().expect("products").len(), 5);
}

#[tokio::test]
async fn test_listing_filters_by_category() {
    let (status, body) = get_json("/products?category=fantasy").await;

    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().expect("products");
    assert_eq!(products.len(), 2);
    for card in products {
        assert_eq!(card["category_id"], "fantasy");
    }
}

#[tokio::test]
async fn test_listing_text_search_reaches_story_fields() {
    // "citadel" appears only in story one's title.
    let (status, body) = get_json("/products?q=citadel").await;

    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().expect("products");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], 1);
}

#[tokio::test]
async fn test_listing_unknown_sort_falls_back_to_popular() {
    let (status, body) = get_json("/products?sort=bogus").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sort"], "popular");
    assert_eq!(body["total"], 5);
}

// ============================================================================
// Detail Tests
// ============================================================================

#[tokio::test]
async fn test_detail_renders_chapters_with_the_product_name() {
    let (status, body) = get_json("/products/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Classic White Sneakers");
    assert_eq!(body["story_title"], "The Legend of Cloudwhite Citadel");

    let chapters = body["chapters"].as_array().expect("chapters");
    assert!(!chapters.is_empty());
    let content = chapters[0]["content"].as_str().expect("chapter content");
    assert!(content.contains("Classic White Sneakers"));
    assert!(!content.contains("{name}"));
}

#[tokio::test]
async fn test_detail_unknown_product_is_404_not_a_panic() {
    let (status, body) = get("/products/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Not found"));
}

// ============================================================================
// Filter UI Tests
// ============================================================================

#[tokio::test]
async fn test_filters_endpoint_lists_the_search_console_data() {
    let (status, body) = get_json("/products/filters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().expect("categories").len(), 8);
    assert_eq!(body["lengths"].as_array().expect("lengths").len(), 3);
    assert_eq!(body["sorts"].as_array().expect("sorts").len(), 4);
}

//! Order route handlers.
//!
//! Checkout is simulated end to end, so the confirmation view is a fixed
//! mock order rather than a record of anything that happened.

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use storybound_core::Price;

/// A line on the mock order.
#[derive(Debug, Serialize)]
pub struct OrderItemView {
    pub id: i32,
    pub name: &'static str,
    pub story_title: &'static str,
    pub emoji: &'static str,
    pub category: &'static str,
    pub price: String,
    pub quantity: u32,
    /// Teaser for the story chapter that "unlocks" with the purchase.
    pub next_chapter: &'static str,
}

/// Shipping blurb on the mock order.
#[derive(Debug, Serialize)]
pub struct ShippingView {
    pub method: &'static str,
    pub estimated_days: &'static str,
    pub tracking_story: &'static str,
}

/// The order confirmation view.
#[derive(Debug, Serialize)]
pub struct OrderConfirmationView {
    pub id: String,
    pub date: String,
    pub status: &'static str,
    pub items: Vec<OrderItemView>,
    pub shipping: ShippingView,
    pub total: String,
}

/// Display the static order confirmation.
pub async fn confirmation() -> Json<OrderConfirmationView> {
    let now = Utc::now();

    Json(OrderConfirmationView {
        id: format!("STORY-{}-001", now.format("%Y")),
        date: now.format("%Y-%m-%d").to_string(),
        status: "confirmed",
        items: vec![OrderItemView {
            id: 1,
            name: "Classic White Sneakers",
            story_title: "The Legend of Cloudwhite Citadel",
            emoji: "🏰",
            category: "Fantasy",
            price: Price::from_cents(298_000).display(),
            quantity: 1,
            next_chapter: "Chapter Three: A New Journey",
        }],
        shipping: ShippingView {
            method: "Magical Express",
            estimated_days: "2-3",
            tracking_story: "Your story is being carefully wrapped in the magic workshop",
        },
        total: Price::from_cents(298_000).display(),
    })
}

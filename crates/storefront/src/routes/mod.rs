//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to product listing
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /api/products           - Raw catalog feed (JSON array)
//! GET  /products               - Filtered/sorted story cards
//!                                (?category=&length=&q=&sort=)
//! GET  /products/filters       - Filter UI data (categories, lengths, sorts)
//! GET  /products/{id}          - Product detail with full story chapters
//!
//! # Cart
//! GET  /cart                   - Cart with totals
//! POST /cart/add               - Add to cart (returns count, triggers
//!                                cart-updated + star-burst)
//! POST /cart/update            - Set quantity (0 removes)
//! POST /cart/remove            - Remove line
//! GET  /cart/count             - Cart count badge
//! POST /cart/checkout          - Simulated checkout, redirects to
//!                                confirmation
//!
//! # Orders
//! GET  /orders/confirmation    - Static mock order confirmation
//! ```

pub mod cart;
pub mod orders;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Home page: the listing is the storefront's front door.
async fn home() -> Redirect {
    Redirect::to("/products")
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/filters", get(products::filters))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home))
        // Catalog feed
        .route("/api/products", get(products::api_index))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Order confirmation
        .route("/orders/confirmation", get(orders::confirmation))
}

//! Cart route handlers.
//!
//! The cart key is stored in the session and mapped to a persisted cart by
//! the cart service, so any handler can mutate the same logical cart.
//! Mutating responses carry an `HX-Trigger` header; `star-burst` is the
//! celebration acknowledgment the client renders.

use std::time::Duration;

use axum::{
    Form, Json,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use storybound_core::{Price, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::{CartItem, CartSnapshot};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Session keys used by the cart.
pub mod session_keys {
    /// Key for storing the persistent cart key.
    pub const CART_KEY: &str = "cart_key";
}

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image_url: String,
    pub story_reason: String,
    pub emotional_connection: String,
    pub story_emoji: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        let line_cents = item.price_in_cents.as_cents() * i64::from(item.quantity);
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price_in_cents.display(),
            line_price: Price::from_cents(line_cents).display(),
            image_url: item.image_url.clone(),
            story_reason: item.story_reason.clone(),
            emotional_connection: item.emotional_connection.clone(),
            story_emoji: item.story_emoji.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&CartSnapshot> for CartView {
    fn from(snapshot: &CartSnapshot) -> Self {
        Self {
            items: snapshot.items.iter().map(CartItemView::from).collect(),
            subtotal: snapshot.totals.total_price.display(),
            item_count: snapshot.totals.total_items,
        }
    }
}

/// Cart count badge data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart key from the session, minting one on first use.
async fn cart_key(session: &Session) -> String {
    if let Ok(Some(key)) = session.get::<String>(session_keys::CART_KEY).await {
        return key;
    }

    let key = uuid::Uuid::new_v4().to_string();
    if let Err(e) = session.insert(session_keys::CART_KEY, &key).await {
        // The cart still works for this request; it just won't stick to
        // the session.
        tracing::error!("Failed to save cart key to session: {e}");
    }
    key
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Display the cart with totals.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Json<CartView> {
    let key = cart_key(&session).await;
    let snapshot = state.cart().snapshot(&key);
    Json(CartView::from(&snapshot))
}

/// Add one unit of a product to the cart.
///
/// Returns the cart count badge with triggers to update the cart UI and
/// play the celebration.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let product = state
        .find_product(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?
        .clone();

    let key = cart_key(&session).await;
    let snapshot = {
        let mut rng = state.rng();
        state.cart().add(&key, &product, &mut *rng)
    };

    tracing::debug!(product = %id, count = snapshot.totals.total_items, "Added to cart");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated, star-burst")]),
        Json(CartCountView {
            count: snapshot.totals.total_items,
        }),
    )
        .into_response())
}

/// Set a cart line's quantity; zero or less removes the line.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Response {
    let key = cart_key(&session).await;
    let snapshot = state
        .cart()
        .update_quantity(&key, ProductId::new(form.product_id), form.quantity);

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        Json(CartView::from(&snapshot)),
    )
        .into_response()
}

/// Remove a line from the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let key = cart_key(&session).await;
    let snapshot = state.cart().remove(&key, ProductId::new(form.product_id));

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        Json(CartView::from(&snapshot)),
    )
        .into_response()
}

/// Get the cart count badge.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Json<CartCountView> {
    let key = cart_key(&session).await;
    let snapshot = state.cart().snapshot(&key);
    Json(CartCountView {
        count: snapshot.totals.total_items,
    })
}

/// Simulated checkout: pause for effect, then redirect to the static
/// confirmation view. No payment, inventory, or order record is involved,
/// and the cart is deliberately left intact.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Response {
    let key = cart_key(&session).await;
    let snapshot = state.cart().snapshot(&key);

    if snapshot.items.is_empty() {
        // Nothing to check out; back to the cart page.
        return Redirect::to("/cart").into_response();
    }

    tokio::time::sleep(Duration::from_millis(state.config().checkout_delay_ms)).await;
    tracing::info!(
        items = snapshot.totals.total_items,
        total = %snapshot.totals.total_price,
        "Simulated checkout complete"
    );

    (
        AppendHeaders([("HX-Trigger", "star-burst")]),
        Redirect::to("/orders/confirmation"),
    )
        .into_response()
}

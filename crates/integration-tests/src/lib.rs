//! Integration tests for Storybound.
//!
//! The tests drive the real storefront router in-process with
//! `tower::ServiceExt::oneshot`, so no socket is bound and no server has
//! to be running. Carts use the in-memory store and the randomness source
//! is seeded, keeping every run reproducible.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storybound-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use storybound_storefront::config::{CartStoreKind, StorefrontConfig};
use storybound_storefront::{middleware, routes, state::AppState};

/// Build the full storefront router the way the binary does, minus the
/// trace layer and with test-friendly configuration.
///
/// Clones of the returned router share state and the session store, so a
/// session cookie from one request can be replayed on the next.
///
/// # Panics
///
/// Panics if application state cannot be built; with the in-memory cart
/// store there is nothing environmental left to fail.
#[must_use]
pub fn storefront_app() -> Router {
    let config = StorefrontConfig {
        cart_store: CartStoreKind::Memory,
        checkout_delay_ms: 0,
        rng_seed: Some(42),
        ..StorefrontConfig::default()
    };

    let state = AppState::new(config).expect("Failed to build application state");
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(state)
}

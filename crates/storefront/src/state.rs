//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use storybound_core::{Product, ProductId};

use crate::cart::CartService;
use crate::cart::store::{CartStore, JsonFileStore, MemoryStore};
use crate::catalog;
use crate::config::{CartStoreKind, StorefrontConfig};
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources: configuration, the read-only catalog, the cart
/// service, and the process-wide randomness source.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Vec<Product>,
    cart: CartService,
    // Single injection point for randomness: seeding it makes the popular
    // sort and reason picks reproducible end to end.
    rng: Mutex<StdRng>,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Loads the catalog and wires the cart store selected by the config.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the file-backed cart directory cannot
    /// be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, AppError> {
        let catalog = catalog::load_catalog(config.catalog_path.as_deref());

        let store: Arc<dyn CartStore> = match config.cart_store {
            CartStoreKind::File => Arc::new(JsonFileStore::new(&config.cart_dir)?),
            CartStoreKind::Memory => Arc::new(MemoryStore::default()),
        };
        let cart = CartService::new(store);

        let rng = config
            .rng_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart,
                rng: Mutex::new(rng),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the read-only product catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.inner.catalog
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.inner.catalog.iter().find(|product| product.id == id)
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }

    /// Lock the shared randomness source.
    pub fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.inner.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        let config = StorefrontConfig {
            cart_store: CartStoreKind::Memory,
            rng_seed: Some(42),
            ..StorefrontConfig::default()
        };
        AppState::new(config).expect("state")
    }

    #[test]
    fn test_state_loads_seed_catalog() {
        let state = test_state();
        assert_eq!(state.catalog().len(), 5);
    }

    #[test]
    fn test_find_product() {
        let state = test_state();
        assert!(state.find_product(ProductId::new(1)).is_some());
        assert!(state.find_product(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_unusable_cart_dir_is_a_storage_error() {
        // A regular file where the cart directory should go makes
        // create_dir_all fail.
        let blocker =
            std::env::temp_dir().join(format!("storybound-state-{}", uuid::Uuid::new_v4()));
        std::fs::write(&blocker, b"not a directory").expect("write blocker");

        let config = StorefrontConfig {
            cart_store: CartStoreKind::File,
            cart_dir: blocker.join("carts"),
            ..StorefrontConfig::default()
        };

        let err = AppState::new(config).expect_err("state build should fail");
        assert!(matches!(err, AppError::Storage(_)));

        std::fs::remove_file(&blocker).expect("cleanup");
    }
}

//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront starts with sensible defaults.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `STOREFRONT_CATALOG_PATH` - JSON product catalog file; unset uses the
//!   built-in seed catalog
//! - `STOREFRONT_CART_STORE` - Cart persistence backend: `file` or `memory`
//!   (default: file)
//! - `STOREFRONT_CART_DIR` - Directory for file-backed carts
//!   (default: data/carts)
//! - `STOREFRONT_CHECKOUT_DELAY_MS` - Simulated checkout delay (default: 1500)
//! - `STOREFRONT_RNG_SEED` - Fixed seed for the randomness source; unset
//!   draws from OS entropy

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which backend persists carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartStoreKind {
    /// One JSON file per cart key under `cart_dir`.
    #[default]
    File,
    /// Process-lifetime in-memory store (carts vanish on restart).
    Memory,
}

impl CartStoreKind {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "file" => Some(Self::File),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// JSON catalog file; `None` uses the built-in seed catalog
    pub catalog_path: Option<PathBuf>,
    /// Cart persistence backend
    pub cart_store: CartStoreKind,
    /// Directory for file-backed carts
    pub cart_dir: PathBuf,
    /// Simulated checkout delay in milliseconds
    pub checkout_delay_ms: u64,
    /// Fixed seed for the randomness source; `None` uses OS entropy
    pub rng_seed: Option<u64>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let catalog_path = get_optional_env("STOREFRONT_CATALOG_PATH").map(PathBuf::from);

        let cart_store = match get_optional_env("STOREFRONT_CART_STORE") {
            Some(value) => CartStoreKind::parse(&value).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "STOREFRONT_CART_STORE".to_string(),
                    format!("expected 'file' or 'memory', got '{value}'"),
                )
            })?,
            None => CartStoreKind::default(),
        };
        let cart_dir = PathBuf::from(get_env_or_default("STOREFRONT_CART_DIR", "data/carts"));

        let checkout_delay_ms = get_env_or_default("STOREFRONT_CHECKOUT_DELAY_MS", "1500")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_CHECKOUT_DELAY_MS".to_string(), e.to_string())
            })?;

        let rng_seed = get_optional_env("STOREFRONT_RNG_SEED")
            .map(|value| {
                value.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidEnvVar("STOREFRONT_RNG_SEED".to_string(), e.to_string())
                })
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
            cart_store,
            cart_dir,
            checkout_delay_ms,
            rng_seed,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            catalog_path: None,
            cart_store: CartStoreKind::File,
            cart_dir: PathBuf::from("data/carts"),
            checkout_delay_ms: 1500,
            rng_seed: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..StorefrontConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_cart_store_kind_parse() {
        assert_eq!(CartStoreKind::parse("file"), Some(CartStoreKind::File));
        assert_eq!(CartStoreKind::parse("memory"), Some(CartStoreKind::Memory));
        assert_eq!(CartStoreKind::parse("postgres"), None);
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.cart_store, CartStoreKind::File);
        assert_eq!(config.checkout_delay_ms, 1500);
        assert!(config.rng_seed.is_none());
        assert!(config.catalog_path.is_none());
    }
}

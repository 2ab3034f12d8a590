//! The catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A product in the catalog.
///
/// Products are immutable once loaded; the storefront holds a read-only
/// copy for its lifetime. The wire layout matches the catalog feed:
/// `{id, name, price_in_cents, image_url}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in integer cents.
    pub price_in_cents: Price,
    /// Image URL for display.
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_layout() {
        let json = r#"{"id":1,"name":"Classic White Sneakers","price_in_cents":298000,"image_url":"/images/sneakers.jpg"}"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price_in_cents, Price::from_cents(298_000));

        let back = serde_json::to_string(&product).expect("serialize");
        assert_eq!(back, json);
    }
}

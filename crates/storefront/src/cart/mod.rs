//! The cart state manager.
//!
//! `CartService` owns the authoritative in-memory carts for the running
//! process, keyed by a per-session cart key, and mirrors every mutation to
//! an injected [`CartStore`] before returning. The persisted copy is only
//! read once per key, to hydrate; after that the in-memory copy wins.
//!
//! A persisted cart carries a schema version so the layout can evolve;
//! anything unreadable hydrates as empty rather than failing the request.

pub mod store;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use rand::Rng;
use serde::{Deserialize, Serialize};
use storybound_core::{Price, Product, ProductId};

use self::store::CartStore;

/// Version of the persisted cart layout.
pub const CART_SCHEMA_VERSION: u32 = 1;

/// One line in the cart: a product snapshot, a quantity, and the display
/// metadata captured when the line was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price_in_cents: Price,
    pub image_url: String,
    pub quantity: u32,
    #[serde(rename = "storyReason")]
    pub story_reason: String,
    #[serde(rename = "emotionalConnection")]
    pub emotional_connection: String,
    #[serde(rename = "storyEmoji")]
    pub story_emoji: String,
}

/// Cart totals, always recomputed from the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub total_price: Price,
    pub total_items: u32,
}

/// Items plus totals after an operation.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

/// On-disk cart layout.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedCart {
    version: u32,
    items: Vec<CartItem>,
}

/// A record in the emotional-reason table.
#[derive(Debug, Clone, Copy)]
struct EmotionalReason {
    reason: &'static str,
    connection: &'static str,
    emoji: &'static str,
}

/// Reasons attached to a line when it first enters the cart. One is picked
/// by the injected RNG; the pick is never re-rolled for an existing line.
static REASONS: [EmotionalReason; 5] = [
    EmotionalReason {
        reason: "Because this story touched my heart",
        connection: "The adventurous spirit in it reminded me of my younger dreams",
        emoji: "💫",
    },
    EmotionalReason {
        reason: "This story brought me a moment of peace",
        connection: "Like its hero, I am still looking for answers of my own",
        emoji: "🌟",
    },
    EmotionalReason {
        reason: "The warmth of the story made me want to keep it",
        connection: "Every time I see it, that lovely story comes back to me",
        emoji: "✨",
    },
    EmotionalReason {
        reason: "This story stands for the life I want to live",
        connection: "It is not just a product, it is my values made visible",
        emoji: "🎭",
    },
    EmotionalReason {
        reason: "The courage in the story gave me strength",
        connection: "Owning it feels like owning the story's courage and wisdom",
        emoji: "⚡",
    },
];

/// Compute totals for a list of cart items.
#[must_use]
pub fn compute_totals(items: &[CartItem]) -> CartTotals {
    let total_price = items
        .iter()
        .map(|item| item.price_in_cents.as_cents() * i64::from(item.quantity))
        .sum();
    let total_items = items.iter().map(|item| item.quantity).sum();
    CartTotals {
        total_price: Price::from_cents(total_price),
        total_items,
    }
}

/// The cart state manager.
pub struct CartService {
    store: Arc<dyn CartStore>,
    carts: Mutex<HashMap<String, Vec<CartItem>>>,
}

impl CartService {
    /// Create a service backed by the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self {
            store,
            carts: Mutex::new(HashMap::new()),
        }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// An existing line increments its quantity and keeps its display
    /// metadata; a new line gets metadata drawn from the reason table via
    /// `rng` and starts at quantity 1.
    pub fn add<R: Rng>(&self, key: &str, product: &Product, rng: &mut R) -> CartSnapshot {
        let mut carts = self.lock();
        let items = self.hydrated_entry(&mut carts, key);

        if let Some(item) = items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += 1;
        } else {
            let pick = REASONS[rng.random_range(0..REASONS.len())];
            items.push(CartItem {
                id: product.id,
                name: product.name.clone(),
                price_in_cents: product.price_in_cents,
                image_url: product.image_url.clone(),
                quantity: 1,
                story_reason: pick.reason.to_string(),
                emotional_connection: pick.connection.to_string(),
                story_emoji: pick.emoji.to_string(),
            });
        }

        let snapshot = snapshot_of(items);
        self.persist(key, items);
        snapshot
    }

    /// Set the quantity of a line; zero or negative removes it.
    pub fn update_quantity(&self, key: &str, id: ProductId, quantity: i64) -> CartSnapshot {
        let mut carts = self.lock();
        let items = self.hydrated_entry(&mut carts, key);

        if quantity <= 0 {
            items.retain(|item| item.id != id);
        } else if let Some(item) = items.iter_mut().find(|item| item.id == id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }

        let snapshot = snapshot_of(items);
        self.persist(key, items);
        snapshot
    }

    /// Drop a line unconditionally.
    pub fn remove(&self, key: &str, id: ProductId) -> CartSnapshot {
        let mut carts = self.lock();
        let items = self.hydrated_entry(&mut carts, key);
        items.retain(|item| item.id != id);

        let snapshot = snapshot_of(items);
        self.persist(key, items);
        snapshot
    }

    /// Current items and totals, hydrating from the store on first access.
    pub fn snapshot(&self, key: &str) -> CartSnapshot {
        let mut carts = self.lock();
        let items = self.hydrated_entry(&mut carts, key);
        snapshot_of(items)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<CartItem>>> {
        self.carts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the in-memory items for a key, loading from the store the first
    /// time the key is seen. Absent or unreadable data hydrates as empty.
    fn hydrated_entry<'a>(
        &self,
        carts: &'a mut HashMap<String, Vec<CartItem>>,
        key: &str,
    ) -> &'a mut Vec<CartItem> {
        carts
            .entry(key.to_string())
            .or_insert_with(|| self.hydrate(key))
    }

    fn hydrate(&self, key: &str) -> Vec<CartItem> {
        let payload = match self.store.load(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read persisted cart, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<PersistedCart>(&payload) {
            Ok(cart) if cart.version == CART_SCHEMA_VERSION => cart.items,
            Ok(cart) => {
                tracing::warn!(key, version = cart.version, "Unknown cart schema version, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Malformed persisted cart, starting empty");
                Vec::new()
            }
        }
    }

    /// Mirror the in-memory cart to the store. A write failure is logged
    /// and otherwise ignored: the in-memory cart stays authoritative for
    /// the rest of the session.
    fn persist(&self, key: &str, items: &[CartItem]) {
        let persisted = PersistedCart {
            version: CART_SCHEMA_VERSION,
            items: items.to_vec(),
        };
        let payload = match serde_json::to_string(&persisted) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.store.save(key, &payload) {
            tracing::warn!(key, error = %e, "Failed to persist cart, keeping in-memory state");
        }
    }
}

fn snapshot_of(items: &[CartItem]) -> CartSnapshot {
    CartSnapshot {
        items: items.to_vec(),
        totals: compute_totals(items),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::store::MemoryStore;
    use super::*;

    fn product(id: i32, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price_in_cents: Price::from_cents(cents),
            image_url: format!("/images/{id}.jpg"),
        }
    }

    fn service() -> CartService {
        CartService::new(Arc::new(MemoryStore::default()))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_add_inserts_then_increments() {
        let service = service();
        let mut rng = rng();
        let p = product(1, 298_000);

        let snapshot = service.add("cart", &p, &mut rng);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 1);

        let snapshot = service.add("cart", &p, &mut rng);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].quantity, 2);
    }

    #[test]
    fn test_add_does_not_reroll_metadata() {
        let service = service();
        let mut rng = rng();
        let p = product(1, 298_000);

        let first = service.add("cart", &p, &mut rng);
        let reason = first.items[0].story_reason.clone();
        let emoji = first.items[0].story_emoji.clone();

        for _ in 0..10 {
            let snapshot = service.add("cart", &p, &mut rng);
            assert_eq!(snapshot.items[0].story_reason, reason);
            assert_eq!(snapshot.items[0].story_emoji, emoji);
        }
    }

    #[test]
    fn test_metadata_comes_from_reason_table() {
        let service = service();
        let snapshot = service.add("cart", &product(1, 100), &mut rng());
        let item = &snapshot.items[0];
        assert!(REASONS.iter().any(|r| {
            r.reason == item.story_reason
                && r.connection == item.emotional_connection
                && r.emoji == item.story_emoji
        }));
    }

    #[test]
    fn test_update_quantity_sets_and_removes() {
        let service = service();
        let mut rng = rng();
        let p = product(1, 100);
        service.add("cart", &p, &mut rng);

        let snapshot = service.update_quantity("cart", p.id, 5);
        assert_eq!(snapshot.items[0].quantity, 5);

        let snapshot = service.update_quantity("cart", p.id, 0);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.totals.total_items, 0);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let service = service();
        let mut rng = rng();
        let p = product(1, 100);
        service.add("cart", &p, &mut rng);

        let snapshot = service.update_quantity("cart", p.id, -3);
        assert!(snapshot.items.is_empty());
    }

    #[test]
    fn test_remove_drops_line() {
        let service = service();
        let mut rng = rng();
        service.add("cart", &product(1, 100), &mut rng);
        service.add("cart", &product(2, 200), &mut rng);

        let snapshot = service.remove("cart", ProductId::new(1));
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, ProductId::new(2));
    }

    #[test]
    fn test_totals_worked_example() {
        // Add id 1 once and id 3 twice: 298000*1 + 89900*2 = 477800, 3 items.
        let service = service();
        let mut rng = rng();
        service.add("cart", &product(1, 298_000), &mut rng);
        service.add("cart", &product(3, 89_900), &mut rng);
        let snapshot = service.add("cart", &product(3, 89_900), &mut rng);

        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.totals.total_price, Price::from_cents(477_800));
        assert_eq!(snapshot.totals.total_items, 3);
    }

    #[test]
    fn test_persisted_roundtrip_reproduces_cart() {
        let store = Arc::new(MemoryStore::default());
        let mut rng = rng();

        let service = CartService::new(Arc::clone(&store) as Arc<dyn CartStore>);
        service.add("cart", &product(1, 298_000), &mut rng);
        service.add("cart", &product(3, 89_900), &mut rng);
        let before = service.snapshot("cart");

        // A fresh service over the same store hydrates an equal cart.
        let rehydrated = CartService::new(store as Arc<dyn CartStore>);
        let after = rehydrated.snapshot("cart");
        assert_eq!(before.items, after.items);
        assert_eq!(before.totals, after.totals);
    }

    #[test]
    fn test_malformed_persisted_cart_hydrates_empty() {
        let store = Arc::new(MemoryStore::default());
        store.save("cart", "{not json").expect("save");

        let service = CartService::new(store as Arc<dyn CartStore>);
        let snapshot = service.snapshot("cart");
        assert!(snapshot.items.is_empty());
    }

    #[test]
    fn test_unknown_schema_version_hydrates_empty() {
        let store = Arc::new(MemoryStore::default());
        store
            .save("cart", r#"{"version":99,"items":[]}"#)
            .expect("save");

        let service = CartService::new(store as Arc<dyn CartStore>);
        assert!(service.snapshot("cart").items.is_empty());
    }

    #[test]
    fn test_carts_are_isolated_by_key() {
        let service = service();
        let mut rng = rng();
        service.add("alpha", &product(1, 100), &mut rng);

        assert!(service.snapshot("beta").items.is_empty());
        assert_eq!(service.snapshot("alpha").items.len(), 1);
    }

    #[test]
    fn test_persisted_layout_field_names() {
        let service = service();
        let snapshot = service.add("cart", &product(1, 298_000), &mut rng());
        let json = serde_json::to_string(&snapshot.items[0]).expect("serialize");
        assert!(json.contains("\"price_in_cents\""));
        assert!(json.contains("\"storyReason\""));
        assert!(json.contains("\"emotionalConnection\""));
        assert!(json.contains("\"storyEmoji\""));
    }

    /// A store whose writes always fail.
    struct FailingStore;

    impl CartStore for FailingStore {
        fn load(&self, _key: &str) -> Result<Option<String>, store::StoreError> {
            Ok(None)
        }

        fn save(&self, _key: &str, _payload: &str) -> Result<(), store::StoreError> {
            Err(store::StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let service = CartService::new(Arc::new(FailingStore));
        let mut rng = rng();
        service.add("cart", &product(1, 100), &mut rng);
        service.add("cart", &product(1, 100), &mut rng);

        let snapshot = service.snapshot("cart");
        assert_eq!(snapshot.items[0].quantity, 2);
    }
}

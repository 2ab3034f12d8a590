//! Catalog loading and the filter/sort engine.
//!
//! The engine transforms `(products, criteria)` into an ordered list of
//! (product, theme) pairs. It is pure and synchronous: safe to re-run on
//! every request, with an empty result as a valid outcome. The only
//! randomness - the "popular" ordering - comes from an injected RNG so a
//! fixed seed reproduces the order exactly.

use std::cmp::Ordering;
use std::path::Path;

use rand::Rng;
use storybound_core::{Price, Product, ProductId};

use crate::story::{StoryTheme, derive_theme};

/// Sort orders offered by the listing UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Rating weighted by a draw from the injected RNG.
    #[default]
    Popular,
    /// Descending rating.
    Rating,
    /// Ascending read time.
    ReadingTime,
    /// Descending product id.
    Newest,
}

impl SortKey {
    /// Parse a query-parameter value. Unknown values fall back to `Popular`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "rating" => Self::Rating,
            "reading_time" => Self::ReadingTime,
            "newest" => Self::Newest,
            _ => Self::Popular,
        }
    }

    /// The query-parameter value for this sort order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::ReadingTime => "reading_time",
            Self::Newest => "newest",
        }
    }
}

/// User-selected filter and sort criteria.
#[derive(Debug, Clone)]
pub struct CatalogCriteria {
    /// Category id, or "all" for no category filtering.
    pub category: String,
    /// Length bucket id; empty means no length filtering.
    pub length: String,
    /// Free-text query; empty means no text filtering.
    pub query: String,
    /// Sort order.
    pub sort: SortKey,
}

impl Default for CatalogCriteria {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            length: String::new(),
            query: String::new(),
            sort: SortKey::default(),
        }
    }
}

/// A product paired with its derived story theme.
#[derive(Debug, Clone, Copy)]
pub struct StoryCard<'a> {
    pub product: &'a Product,
    pub theme: &'static StoryTheme,
}

/// Filter and sort the catalog for display.
///
/// Filters apply in order (category, length, text), each preserving the
/// relative order of survivors; the final sort is stable, so ties keep
/// their prior order.
pub fn filter_and_sort<'a, R: Rng>(
    products: &'a [Product],
    criteria: &CatalogCriteria,
    rng: &mut R,
) -> Vec<StoryCard<'a>> {
    let mut cards: Vec<StoryCard<'a>> = products
        .iter()
        .map(|product| StoryCard {
            product,
            theme: derive_theme(product.id),
        })
        .collect();

    if criteria.category != "all" {
        cards.retain(|card| card.theme.category_id == criteria.category);
    }

    if !criteria.length.is_empty() {
        cards.retain(|card| card.theme.length_category == criteria.length);
    }

    if !criteria.query.is_empty() {
        let query = criteria.query.to_lowercase();
        cards.retain(|card| matches_query(card, &query));
    }

    match criteria.sort {
        SortKey::Rating => {
            cards.sort_by(|a, b| compare_f64(b.theme.rating, a.theme.rating));
        }
        SortKey::ReadingTime => {
            cards.sort_by_key(|card| card.theme.read_time_minutes);
        }
        SortKey::Newest => {
            cards.sort_by(|a, b| b.product.id.cmp(&a.product.id));
        }
        SortKey::Popular => {
            // One weight per card, drawn up front: the comparator itself is
            // deterministic, and a fixed seed reproduces the full order.
            let mut weighted: Vec<(StoryCard<'a>, f64)> = cards
                .into_iter()
                .map(|card| {
                    let weight = card.theme.rating * rng.random::<f64>();
                    (card, weight)
                })
                .collect();
            weighted.sort_by(|a, b| compare_f64(b.1, a.1));
            cards = weighted.into_iter().map(|(card, _)| card).collect();
        }
    }

    cards
}

/// Case-insensitive substring containment across name, title, excerpt,
/// and tags. `query` must already be lower-cased.
fn matches_query(card: &StoryCard<'_>, query: &str) -> bool {
    card.product.name.to_lowercase().contains(query)
        || card.theme.story_title.to_lowercase().contains(query)
        || card.theme.story_excerpt.to_lowercase().contains(query)
        || card
            .theme
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

/// Total order on f64 weights; NaN never occurs for ratings in [0, 5].
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// =============================================================================
// Catalog Loading
// =============================================================================

/// Load the product catalog.
///
/// With a path, reads a JSON array of products; a missing or malformed
/// file degrades to the empty catalog with a warning rather than failing
/// startup. Without a path, returns the built-in seed catalog.
#[must_use]
pub fn load_catalog(path: Option<&Path>) -> Vec<Product> {
    let Some(path) = path else {
        let catalog = seed_catalog();
        tracing::info!(products = catalog.len(), "Loaded built-in seed catalog");
        return catalog;
    };

    let payload = match std::fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read catalog, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Product>>(&payload) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
            catalog
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Malformed catalog, starting empty");
            Vec::new()
        }
    }
}

/// The built-in demo catalog, matching the five-entry story tables.
#[must_use]
pub fn seed_catalog() -> Vec<Product> {
    let seed = [
        (1, "Classic White Sneakers", 298_000, "/images/classic-white-sneakers.jpg"),
        (2, "Minimalist Leather Wallet", 129_000, "/images/minimalist-leather-wallet.jpg"),
        (3, "Retro Round Sunglasses", 89_900, "/images/retro-round-sunglasses.jpg"),
        (4, "Nordic Ceramic Mug", 45_000, "/images/nordic-ceramic-mug.jpg"),
        (5, "Moonlight Wool Scarf", 68_000, "/images/moonlight-wool-scarf.jpg"),
    ];

    seed.into_iter()
        .map(|(id, name, cents, image_url)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price_in_cents: Price::from_cents(cents),
            image_url: image_url.to_string(),
        })
        .collect()
}

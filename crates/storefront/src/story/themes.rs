//! The story theme table and its derivation rule.
//!
//! A theme is decorative metadata keyed by product id: the id picks a row
//! from a fixed table, wrapping around when the catalog is larger than the
//! table. The derivation is total for every id and recomputed on demand;
//! it has no persisted identity.

use serde::Serialize;
use storybound_core::ProductId;

/// Decorative story metadata for one product.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StoryTheme {
    /// Display name of the category.
    pub category: &'static str,
    /// Category identifier used by the filter UI.
    pub category_id: &'static str,
    /// Category glyph.
    pub emoji: &'static str,
    /// Human-readable read time, e.g. "5 min read".
    pub read_time: &'static str,
    /// Read time in whole minutes.
    pub read_time_minutes: u32,
    /// Length bucket identifier, e.g. "short".
    pub length_category: &'static str,
    /// Story rating on a 5-point scale.
    pub rating: f64,
    /// Story title shown on the card.
    pub story_title: &'static str,
    /// One-paragraph teaser.
    pub story_excerpt: &'static str,
    /// Free-text tags, searched by the text filter.
    pub tags: &'static [&'static str],
}

/// The fixed theme table. Product id 1 maps to the first entry.
pub static THEMES: [StoryTheme; 5] = [
    StoryTheme {
        category: "Fantasy Adventure",
        category_id: "fantasy",
        emoji: "🏰",
        read_time: "5 min read",
        read_time_minutes: 5,
        length_category: "short",
        rating: 4.8,
        story_title: "The Legend of Cloudwhite Citadel",
        story_excerpt: "In the distant Cloudwhite Citadel lives a pair of \
            enchanted sneakers said to carry travelers over mountains and \
            rivers, every step bearing the dreams of brave adventurers...",
        tags: &["magic", "adventure", "courage", "flight", "dreams"],
    },
    StoryTheme {
        category: "Modern Style",
        category_id: "modern",
        emoji: "🏙️",
        read_time: "3 min read",
        read_time_minutes: 3,
        length_category: "short",
        rating: 4.6,
        story_title: "Secrets of the City Elite",
        story_excerpt: "Amid the bustle of the city, a simple wallet holds \
            every secret of the successful; each opening and closing tells \
            another chapter of a business legend...",
        tags: &["success", "taste", "minimalism", "city", "elite"],
    },
    StoryTheme {
        category: "Vintage Classic",
        category_id: "vintage",
        emoji: "📻",
        read_time: "4 min read",
        read_time_minutes: 4,
        length_category: "short",
        rating: 4.9,
        story_title: "Memories of a Golden Age",
        story_excerpt: "These sunglasses witnessed the most beautiful of \
            eras, gleaming under golden sunlight, and still radiate an \
            irresistible retro charm today...",
        tags: &["retro", "classic", "nostalgia", "time", "beauty"],
    },
    StoryTheme {
        category: "Warm Healing",
        category_id: "healing",
        emoji: "☕",
        read_time: "2 min read",
        read_time_minutes: 2,
        length_category: "short",
        rating: 4.7,
        story_title: "Warmth of a Nordic Cafe",
        story_excerpt: "On every cold morning this ceramic mug brings a \
            day's worth of warmth and hope, its clean lines carrying the \
            Nordic philosophy of living well...",
        tags: &["warmth", "healing", "nordic", "coffee", "living"],
    },
    StoryTheme {
        category: "Woven Fantasy",
        category_id: "fantasy",
        emoji: "🌙",
        read_time: "6 min read",
        read_time_minutes: 6,
        length_category: "short",
        rating: 4.5,
        story_title: "The Dreamweaver's Gift",
        story_excerpt: "A dreamweaver in the mountains spun this scarf from \
            moonlight and wool; it is said to ward off the coldest storms, \
            every stitch woven through with pleasant dreams...",
        tags: &["moonlight", "weaving", "dreams", "warmth", "magic"],
    },
];

/// Derive the story theme for a product id.
///
/// `theme = THEMES[(id - 1) mod len]`, using euclidean remainder so the
/// lookup is total for zero and negative ids as well.
#[must_use]
pub fn derive_theme(id: ProductId) -> &'static StoryTheme {
    let len = THEMES.len() as i64;
    // Widen to i64 so `id - 1` cannot overflow for i32::MIN.
    let idx = (i64::from(id.as_i32()) - 1).rem_euclid(len) as usize;
    &THEMES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_matches_table() {
        for id in 1..=5 {
            let theme = derive_theme(ProductId::new(id));
            assert_eq!(theme.story_title, THEMES[(id as usize) - 1].story_title);
        }
    }

    #[test]
    fn test_derivation_wraps_around() {
        assert_eq!(
            derive_theme(ProductId::new(6)).story_title,
            THEMES[0].story_title
        );
        assert_eq!(
            derive_theme(ProductId::new(12)).story_title,
            THEMES[1].story_title
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = derive_theme(ProductId::new(3));
        let b = derive_theme(ProductId::new(3));
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_derivation_is_total_for_odd_ids() {
        // Zero and negative ids never appear in the catalog, but the lookup
        // must not panic if one leaks in.
        let _ = derive_theme(ProductId::new(0));
        let _ = derive_theme(ProductId::new(-7));
        let _ = derive_theme(ProductId::new(i32::MIN));
    }

    #[test]
    fn test_category_ids_exist_in_search_ui() {
        for theme in &THEMES {
            assert!(
                crate::story::CATEGORIES
                    .iter()
                    .any(|c| c.id == theme.category_id),
                "theme category '{}' missing from search categories",
                theme.category_id
            );
        }
    }
}

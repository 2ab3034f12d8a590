//! Story metadata derived from the product catalog.
//!
//! Every product carries a decorative story: a theme (category, rating,
//! excerpt, tags) shown on listing cards and a full multi-chapter narrative
//! shown on the detail page. Both are pure functions of the product id -
//! nothing here is stored or fetched.

pub mod chapters;
pub mod themes;

pub use chapters::{FullStory, StoryChapter, derive_full_story};
pub use themes::{StoryTheme, derive_theme};

/// A story category offered by the search UI.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct StoryCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// A story length bucket offered by the search UI.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct StoryLength {
    pub id: &'static str,
    pub name: &'static str,
    pub time: &'static str,
    pub emoji: &'static str,
}

/// Selectable story categories. `all` is the no-filter sentinel.
pub const CATEGORIES: &[StoryCategory] = &[
    StoryCategory {
        id: "all",
        name: "All Stories",
        emoji: "📚",
        description: "Browse every story in the collection",
    },
    StoryCategory {
        id: "fantasy",
        name: "Fantasy Adventure",
        emoji: "🏰",
        description: "Worlds full of magic and wonder",
    },
    StoryCategory {
        id: "modern",
        name: "Modern Style",
        emoji: "🏙️",
        description: "The refined taste of city living",
    },
    StoryCategory {
        id: "vintage",
        name: "Vintage Classic",
        emoji: "📻",
        description: "Fond memories of a golden age",
    },
    StoryCategory {
        id: "healing",
        name: "Warm Healing",
        emoji: "☕",
        description: "Stories that warm the heart",
    },
    StoryCategory {
        id: "romance",
        name: "Romance",
        emoji: "💕",
        description: "Stories about love and beauty",
    },
    StoryCategory {
        id: "adventure",
        name: "Thrilling Adventure",
        emoji: "⚔️",
        description: "Expeditions full of danger and excitement",
    },
    StoryCategory {
        id: "mystery",
        name: "Mystery",
        emoji: "🔮",
        description: "Riddles and enchantments",
    },
];

/// Selectable story length buckets.
pub const LENGTHS: &[StoryLength] = &[
    StoryLength {
        id: "short",
        name: "Quick Read",
        time: "5 min",
        emoji: "⚡",
    },
    StoryLength {
        id: "medium",
        name: "Lunch-Break Story",
        time: "15 min",
        emoji: "📖",
    },
    StoryLength {
        id: "long",
        name: "Deep Read",
        time: "30 min+",
        emoji: "📚",
    },
];

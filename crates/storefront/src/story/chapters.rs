//! Full multi-chapter stories for the product detail page.
//!
//! Like themes, a full story is a pure lookup keyed by product id. Chapter
//! bodies contain a `{name}` placeholder that is replaced with the product
//! name when the story is rendered.

use storybound_core::ProductId;

/// One chapter of a product story.
#[derive(Debug, Clone, Copy)]
pub struct StoryChapter {
    pub title: &'static str,
    /// Chapter body; `{name}` is replaced with the product name.
    pub content: &'static str,
}

impl StoryChapter {
    /// Render the chapter body with the product name filled in.
    #[must_use]
    pub fn render(&self, product_name: &str) -> String {
        self.content.replace("{name}", product_name)
    }
}

/// A complete product story.
#[derive(Debug, Clone, Copy)]
pub struct FullStory {
    pub category: &'static str,
    pub emoji: &'static str,
    pub title: &'static str,
    pub read_time: &'static str,
    pub rating: f64,
    pub chapters: &'static [StoryChapter],
}

/// The fixed story table. Product id 1 maps to the first entry.
static STORIES: [FullStory; 5] = [
    FullStory {
        category: "Fantasy",
        emoji: "🏰",
        title: "The Legend of Cloudwhite Citadel",
        read_time: "5 min read",
        rating: 4.8,
        chapters: &[
            StoryChapter {
                title: "Chapter One: The Call of the Clouds",
                content: "In the distant Cloudwhite Citadel lived an old \
                    cobbler who wove these enchanted sneakers from the \
                    purest clouds in the sky and the most stubborn of \
                    winds. Whoever wears them, the story goes, walks as \
                    lightly as the wind and as freely as the clouds.\n\n\
                    This pair of {name} carries the blessing of the \
                    citadel's guardians; every step feels like treading on \
                    clouds, on cobbled city streets and narrow mountain \
                    paths alike.",
            },
            StoryChapter {
                title: "Chapter Two: The Journey Begins",
                content: "Legend says their first owner was a young \
                    adventurer who wore them across seven continents, up \
                    the highest peaks and through the deepest canyons. \
                    Every journey left the shoes tougher and a little more \
                    alive.\n\nNow they wait for the next kindred spirit to \
                    continue their story of adventure. Perhaps that person \
                    is you.",
            },
        ],
    },
    FullStory {
        category: "Modern",
        emoji: "🏙️",
        title: "Secrets of the City Elite",
        read_time: "3 min read",
        rating: 4.6,
        chapters: &[
            StoryChapter {
                title: "Chapter One: The Power of Simplicity",
                content: "In a city of glass towers, success often hides in \
                    the simplest details. This {name} is more than a \
                    wallet; it is a mark of belonging, a perfect union of \
                    taste and utility.\n\nCut from fine Italian leather and \
                    finished by hand, every stitch shows the maker's \
                    patience and craft.",
            },
            StoryChapter {
                title: "Chapter Two: A Partner in Success",
                content: "It has accompanied countless professionals to the \
                    meetings that mattered, witnessed companies founded and \
                    dreams realized, and kept cards and cash safe through \
                    all of it.\n\nTo choose it is to choose an attitude: \
                    simple without being plain, understated without losing \
                    style.",
            },
        ],
    },
    FullStory {
        category: "Vintage",
        emoji: "📻",
        title: "Memories of a Golden Age",
        read_time: "4 min read",
        rating: 4.9,
        chapters: &[
            StoryChapter {
                title: "Chapter One: A Witness to Time",
                content: "This pair of {name} was born in the most \
                    beautiful of eras, when the sky seemed bluer, the \
                    sunlight warmer, and smiles more sincere. Every \
                    reflection in its lenses holds a treasured memory.\n\n\
                    The round retro frame is more than a tribute to the \
                    classics - it is a pursuit of timeless beauty.",
            },
            StoryChapter {
                title: "Chapter Two: Style Handed Down",
                content: "From Hollywood's golden age to today's streets, \
                    this classic silhouette has never stopped shining. It \
                    shields the wearer's eyes and lends their look a charm \
                    nothing else can replace.\n\nPut it on and you are the \
                    lead in your own story, glowing with vintage appeal.",
            },
        ],
    },
    FullStory {
        category: "Modern",
        emoji: "🏙️",
        title: "Warmth of a Nordic Cafe",
        read_time: "2 min read",
        rating: 4.7,
        chapters: &[
            StoryChapter {
                title: "Chapter One: A Source of Warmth",
                content: "In the Scandinavian snow season, while drifts \
                    piled outside and the hearth glowed within, this {name} \
                    was born. A Nordic potter shaped it from the purest \
                    clay with the warmest of intentions.\n\nClean lines and \
                    a gentle touch - every detail reflects the essence of \
                    Nordic design, function and beauty in balance.",
            },
            StoryChapter {
                title: "Chapter Two: A Daily Ritual",
                content: "Every morning, the first cup of coffee it holds \
                    is a small ceremony. Rising steam carries away \
                    yesterday's fatigue; its warmth wakes the new day.\n\n\
                    It is not merely a cup but a bridge to the good life, a \
                    warm companion no ordinary day should be without.",
            },
        ],
    },
    FullStory {
        category: "Fantasy",
        emoji: "🏰",
        title: "The Dreamweaver's Gift",
        read_time: "6 min read",
        rating: 4.5,
        chapters: &[
            StoryChapter {
                title: "Chapter One: Woven Under Moonlight",
                content: "Deep in a faraway valley lives a mysterious \
                    dreamweaver who works only on nights of the full moon, \
                    spinning silver moonlight into thread and weaving \
                    dreams into cloth. This {name} is one of her finest \
                    works.\n\nEvery strand of wool has been washed in \
                    moonlight, every stitch woven through with pleasant \
                    dreams. Wearing it feels like the moon's own gentle \
                    embrace.",
            },
            StoryChapter {
                title: "Chapter Two: A Warming Magic",
                content: "The scarf is said to hold a quiet magic. On the \
                    coldest winter night it brings the warmth of spring; in \
                    the loneliest hour it brings the feeling of being \
                    cared for.\n\nMore than that, it remembers the fondest \
                    moments of everyone who has owned it, and passes that \
                    warmth on to the next kindred spirit.",
            },
            StoryChapter {
                title: "Chapter Three: A Companion for Always",
                content: "It has watched many winters come and go and \
                    accompanied different people through the seasons of \
                    their lives. It is not merely a defense against the \
                    cold but a keeper of feelings and memories.\n\nNow it \
                    waits to meet you, ready to add a new chapter to your \
                    story.",
            },
        ],
    },
];

/// Derive the full story for a product id, same rule as the theme table.
#[must_use]
pub fn derive_full_story(id: ProductId) -> &'static FullStory {
    let len = STORIES.len() as i32;
    let idx = (id.as_i32() - 1).rem_euclid(len) as usize;
    &STORIES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_lookup_wraps() {
        assert_eq!(derive_full_story(ProductId::new(1)).title, STORIES[0].title);
        assert_eq!(derive_full_story(ProductId::new(6)).title, STORIES[0].title);
    }

    #[test]
    fn test_chapter_render_fills_name() {
        let story = derive_full_story(ProductId::new(1));
        let body = story.chapters[0].render("Classic White Sneakers");
        assert!(body.contains("Classic White Sneakers"));
        assert!(!body.contains("{name}"));
    }

    #[test]
    fn test_every_story_has_chapters() {
        for story in &STORIES {
            assert!(!story.chapters.is_empty());
        }
    }
}

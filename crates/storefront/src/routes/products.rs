//! Product route handlers.
//!
//! The listing endpoint runs the catalog filter/sort engine over query
//! parameters; the detail endpoint adds the full multi-chapter story.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use storybound_core::{Product, ProductId};

use crate::catalog::{self, CatalogCriteria, SortKey, StoryCard};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::story::{self, derive_full_story};

/// Filter and sort query parameters for the listing page.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub length: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

impl CatalogQuery {
    fn into_criteria(self) -> CatalogCriteria {
        CatalogCriteria {
            category: self.category.unwrap_or_else(|| "all".to_string()),
            length: self.length.unwrap_or_default(),
            query: self.q.unwrap_or_default(),
            sort: self.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
        }
    }
}

/// Story card display data for the listing.
#[derive(Debug, Serialize)]
pub struct StoryCardView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub price_in_cents: i64,
    pub image_url: String,
    pub category: &'static str,
    pub category_id: &'static str,
    pub emoji: &'static str,
    pub story_title: &'static str,
    pub story_excerpt: &'static str,
    pub tags: &'static [&'static str],
    pub read_time: &'static str,
    pub rating: f64,
    pub length_category: &'static str,
}

impl From<&StoryCard<'_>> for StoryCardView {
    fn from(card: &StoryCard<'_>) -> Self {
        Self {
            id: card.product.id.as_i32(),
            name: card.product.name.clone(),
            price: card.product.price_in_cents.display(),
            price_in_cents: card.product.price_in_cents.as_cents(),
            image_url: card.product.image_url.clone(),
            category: card.theme.category,
            category_id: card.theme.category_id,
            emoji: card.theme.emoji,
            story_title: card.theme.story_title,
            story_excerpt: card.theme.story_excerpt,
            tags: card.theme.tags,
            read_time: card.theme.read_time,
            rating: card.theme.rating,
            length_category: card.theme.length_category,
        }
    }
}

/// Listing response.
#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub total: usize,
    pub sort: &'static str,
    pub products: Vec<StoryCardView>,
}

/// Rendered chapter for the detail page.
#[derive(Debug, Serialize)]
pub struct ChapterView {
    pub title: &'static str,
    pub content: String,
}

/// Detail page response: the product, its theme, and the full story.
#[derive(Debug, Serialize)]
pub struct ProductStoryView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub price_in_cents: i64,
    pub image_url: String,
    pub category: &'static str,
    pub emoji: &'static str,
    pub story_title: &'static str,
    pub read_time: &'static str,
    pub rating: f64,
    pub chapters: Vec<ChapterView>,
}

/// Sort option for the filter UI.
#[derive(Debug, Serialize)]
pub struct SortOptionView {
    pub id: &'static str,
    pub name: &'static str,
}

/// Filter UI data: categories, lengths, and sort options.
#[derive(Debug, Serialize)]
pub struct FiltersView {
    pub categories: &'static [story::StoryCategory],
    pub lengths: &'static [story::StoryLength],
    pub sorts: Vec<SortOptionView>,
}

/// Display the filtered, sorted product listing.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<ProductListView> {
    let criteria = query.into_criteria();
    let cards = {
        let mut rng = state.rng();
        catalog::filter_and_sort(state.catalog(), &criteria, &mut *rng)
    };

    Json(ProductListView {
        total: cards.len(),
        sort: criteria.sort.as_str(),
        products: cards.iter().map(StoryCardView::from).collect(),
    })
}

/// Display the product detail page with its full story.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductStoryView>> {
    let id = ProductId::new(id);
    let product = state
        .find_product(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let story = derive_full_story(id);
    let chapters = story
        .chapters
        .iter()
        .map(|chapter| ChapterView {
            title: chapter.title,
            content: chapter.render(&product.name),
        })
        .collect();

    Ok(Json(ProductStoryView {
        id: id.as_i32(),
        name: product.name.clone(),
        price: product.price_in_cents.display(),
        price_in_cents: product.price_in_cents.as_cents(),
        image_url: product.image_url.clone(),
        category: story.category,
        emoji: story.emoji,
        story_title: story.title,
        read_time: story.read_time,
        rating: story.rating,
        chapters,
    }))
}

/// Raw catalog feed: a JSON array of `{id, name, price_in_cents, image_url}`.
pub async fn api_index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().to_vec())
}

/// Filter UI data for the search console.
pub async fn filters() -> Json<FiltersView> {
    let sorts = [
        (SortKey::Popular, "Most Popular"),
        (SortKey::Newest, "Newest"),
        (SortKey::Rating, "Highest Rated"),
        (SortKey::ReadingTime, "Read Time"),
    ]
    .into_iter()
    .map(|(key, name)| SortOptionView {
        id: key.as_str(),
        name,
    })
    .collect();

    Json(FiltersView {
        categories: story::CATEGORIES,
        lengths: story::LENGTHS,
        sorts,
    })
}

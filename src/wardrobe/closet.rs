//! Closet views over an in-memory wardrobe
//!
//! The wardrobe is an ordered sequence with the newest item first. Loading
//! and saving it is left to the persistence collaborator.

use serde::Serialize;

use crate::models::{Category, ClothingItem};

/// Item counts per category, plus the total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub top: usize,
    pub bottom: usize,
    pub outer: usize,
    pub shoes: usize,
}

impl CategoryCounts {
    #[must_use]
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Top => self.top,
            Category::Bottom => self.bottom,
            Category::Outer => self.outer,
            Category::Shoes => self.shoes,
        }
    }
}

#[must_use]
pub fn category_counts(wardrobe: &[ClothingItem]) -> CategoryCounts {
    wardrobe.iter().fold(CategoryCounts::default(), |mut counts, item| {
        counts.all += 1;
        match item.category {
            Category::Top => counts.top += 1,
            Category::Bottom => counts.bottom += 1,
            Category::Outer => counts.outer += 1,
            Category::Shoes => counts.shoes += 1,
        }
        counts
    })
}

/// Items of one category in wardrobe order; `None` keeps everything
#[must_use]
pub fn filter_by_category(wardrobe: &[ClothingItem], category: Option<Category>) -> Vec<&ClothingItem> {
    wardrobe
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .collect()
}

/// Put `item` at the front, dropping any older item with the same id
#[must_use]
pub fn add_item(wardrobe: Vec<ClothingItem>, item: ClothingItem) -> Vec<ClothingItem> {
    let mut updated = Vec::with_capacity(wardrobe.len() + 1);
    let id = item.id.clone();
    updated.push(item);
    updated.extend(wardrobe.into_iter().filter(|existing| existing.id != id));
    updated
}

/// Remove the item with `id`; reports whether anything was removed
#[must_use]
pub fn remove_item(wardrobe: Vec<ClothingItem>, id: &str) -> (Vec<ClothingItem>, bool) {
    let before = wardrobe.len();
    let updated: Vec<ClothingItem> = wardrobe.into_iter().filter(|item| item.id != id).collect();
    let removed = updated.len() != before;
    (updated, removed)
}

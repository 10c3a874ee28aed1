//! Clothing items and their canonical classification

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WeatherKind;
use crate::OutfindError;

/// Outfit slot an item fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Top,
    Bottom,
    Outer,
    Shoes,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Top,
        Category::Bottom,
        Category::Outer,
        Category::Shoes,
    ];

    /// Lowercase wire name, also used inside seed keys
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Outer => "outer",
            Category::Shoes => "shoes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = OutfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Category::Top),
            "bottom" => Ok(Category::Bottom),
            "outer" => Ok(Category::Outer),
            "shoes" => Ok(Category::Shoes),
            other => Err(OutfindError::validation(format!("unknown category '{other}'"))),
        }
    }
}

/// Kind of shoe, which alone decides a shoe's weather tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoeType {
    Sneaker,
    Boot,
    Sandal,
    RainBoot,
}

impl ShoeType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ShoeType::Sneaker => "sneaker",
            ShoeType::Boot => "boot",
            ShoeType::Sandal => "sandal",
            ShoeType::RainBoot => "rain_boot",
        }
    }

    /// Fixed weather tags for this shoe type. Boots are never `Warm`.
    #[must_use]
    pub fn weather_tags(self) -> BTreeSet<WeatherKind> {
        let tags: &[WeatherKind] = match self {
            ShoeType::Sneaker => &[WeatherKind::Cold, WeatherKind::Mild, WeatherKind::Warm],
            ShoeType::Boot => &[WeatherKind::Cold, WeatherKind::Mild, WeatherKind::Rainy],
            ShoeType::Sandal => &[WeatherKind::Warm],
            ShoeType::RainBoot => &[WeatherKind::Rainy],
        };
        tags.iter().copied().collect()
    }
}

impl fmt::Display for ShoeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShoeType {
    type Err = OutfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();
        match folded.as_str() {
            "sneaker" => Ok(ShoeType::Sneaker),
            "boot" => Ok(ShoeType::Boot),
            "sandal" => Ok(ShoeType::Sandal),
            "rainboot" => Ok(ShoeType::RainBoot),
            _ => Err(OutfindError::validation(format!("unknown shoe type '{}'", s.trim()))),
        }
    }
}

/// Schema-valid classification of a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemClassification {
    pub category: Category,
    /// Never empty
    pub weather_tags: BTreeSet<WeatherKind>,
    /// Present only for `Category::Shoes`
    pub shoe_type: Option<ShoeType>,
}

impl ItemClassification {
    /// Re-establish the classification invariants on possibly stale data
    #[must_use]
    pub fn enforce_invariants(mut self) -> Self {
        if self.category == Category::Shoes {
            let shoe_type = self.shoe_type.unwrap_or(ShoeType::Sneaker);
            self.shoe_type = Some(shoe_type);
            self.weather_tags = shoe_type.weather_tags();
        } else {
            self.shoe_type = None;
        }
        if self.weather_tags.is_empty() {
            self.weather_tags.insert(WeatherKind::Mild);
        }
        self
    }
}

/// A normalized item in the user's wardrobe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredClothingItem")]
pub struct ClothingItem {
    /// Opaque identifier, unique within a wardrobe
    pub id: String,
    /// Opaque handle to the item's image (URI, path, ...)
    pub image_ref: String,
    pub category: Category,
    pub weather_tags: BTreeSet<WeatherKind>,
    pub shoe_type: Option<ShoeType>,
}

impl ClothingItem {
    #[must_use]
    pub fn new(id: impl Into<String>, image_ref: impl Into<String>, classification: ItemClassification) -> Self {
        let ItemClassification {
            category,
            weather_tags,
            shoe_type,
        } = classification.enforce_invariants();
        Self {
            id: id.into(),
            image_ref: image_ref.into(),
            category,
            weather_tags,
            shoe_type,
        }
    }

    #[must_use]
    pub fn classification(&self) -> ItemClassification {
        ItemClassification {
            category: self.category,
            weather_tags: self.weather_tags.clone(),
            shoe_type: self.shoe_type,
        }
    }

    /// Whether any of the item's tags is in `allowed`
    #[must_use]
    pub fn suits_any(&self, allowed: &[WeatherKind]) -> bool {
        allowed.iter().any(|kind| self.weather_tags.contains(kind))
    }

    /// Weather used to badge the item in a closet view
    #[must_use]
    pub fn badge_weather(&self) -> WeatherKind {
        [WeatherKind::Rainy, WeatherKind::Warm, WeatherKind::Cold]
            .into_iter()
            .find(|kind| self.weather_tags.contains(kind))
            .unwrap_or(WeatherKind::Mild)
    }
}

/// Wire shape of a persisted item, before invariants are re-applied
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredClothingItem {
    id: String,
    #[serde(alias = "image")]
    image_ref: String,
    category: Category,
    #[serde(default)]
    weather_tags: BTreeSet<WeatherKind>,
    /// Single-weather field written by older wardrobes
    #[serde(default)]
    weather: Option<WeatherKind>,
    #[serde(default)]
    shoe_type: Option<ShoeType>,
}

impl From<StoredClothingItem> for ClothingItem {
    fn from(stored: StoredClothingItem) -> Self {
        let mut weather_tags = stored.weather_tags;
        if weather_tags.is_empty() {
            weather_tags.extend(stored.weather);
        }
        ClothingItem::new(
            stored.id,
            stored.image_ref,
            ItemClassification {
                category: stored.category,
                weather_tags,
                shoe_type: stored.shoe_type,
            },
        )
    }
}

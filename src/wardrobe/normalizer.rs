//! Item classification normalizer
//!
//! Trust boundary between the external vision classifier and the wardrobe.
//! Whatever the classifier says, [`normalize`] returns a schema-valid
//! [`ItemClassification`]; for shoes the weather tags always come from the
//! fixed shoe table and the classifier's own guess is discarded.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::{Category, ItemClassification, ShoeType, WeatherKind};

/// Loosely-typed record as produced by the vision classifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClassification {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub weather_tags: Option<Vec<String>>,
    #[serde(default)]
    pub shoe_type: Option<String>,
}

impl RawClassification {
    /// Read a raw record from arbitrary JSON without ever failing.
    ///
    /// Non-string scalars are stringified, a `weatherTags` that is not a
    /// list counts as absent, and anything that is not an object yields an
    /// empty record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            category: object.get("category").and_then(scalar_to_string),
            weather_tags: object
                .get("weatherTags")
                .and_then(Value::as_array)
                .map(|tags| tags.iter().filter_map(scalar_to_string).collect()),
            shoe_type: object.get("shoeType").and_then(scalar_to_string),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Reconcile a raw classifier record into a canonical classification
#[must_use]
pub fn normalize(raw: &RawClassification) -> ItemClassification {
    let category = match raw.category.as_deref() {
        Some(text) => text.parse::<Category>().unwrap_or_else(|_| {
            debug!("Unrecognized category {:?}, defaulting to top", text);
            Category::Top
        }),
        None => {
            debug!("Missing category, defaulting to top");
            Category::Top
        }
    };

    if category == Category::Shoes {
        let shoe_type = match raw.shoe_type.as_deref() {
            Some(text) => text.parse::<ShoeType>().unwrap_or_else(|_| {
                debug!("Unrecognized shoe type {:?}, coercing to sneaker", text);
                ShoeType::Sneaker
            }),
            None => {
                debug!("Missing shoe type, coercing to sneaker");
                ShoeType::Sneaker
            }
        };
        if raw.weather_tags.is_some() {
            debug!("Overriding classifier weather tags for {} shoes", shoe_type);
        }
        return ItemClassification {
            category,
            weather_tags: shoe_type.weather_tags(),
            shoe_type: Some(shoe_type),
        };
    }

    ItemClassification {
        category,
        weather_tags: normalize_tags(raw.weather_tags.as_deref()),
        shoe_type: None,
    }
}

fn normalize_tags(tags: Option<&[String]>) -> BTreeSet<WeatherKind> {
    let Some(tags) = tags else {
        return BTreeSet::from([WeatherKind::Mild]);
    };

    let mut kinds = BTreeSet::new();
    for tag in tags {
        match tag.parse::<WeatherKind>() {
            Ok(kind) => {
                kinds.insert(kind);
            }
            Err(_) => debug!("Dropping unknown weather tag {:?}", tag),
        }
    }

    if kinds.is_empty() {
        kinds.insert(WeatherKind::Mild);
    }
    kinds
}

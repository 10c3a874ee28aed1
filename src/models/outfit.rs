//! Recommended outfit for one location and weather context

use std::collections::BTreeSet;

use serde::Serialize;

use super::{Category, ClothingItem};

/// One pick per slot, borrowed from the wardrobe it was selected from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit<'a> {
    pub top: Option<&'a ClothingItem>,
    pub bottom: Option<&'a ClothingItem>,
    pub outer: Option<&'a ClothingItem>,
    pub shoes: Option<&'a ClothingItem>,
    /// Only ever contains `Top` and/or `Bottom`
    pub missing_slots: BTreeSet<Category>,
}

impl<'a> Outfit<'a> {
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&'a ClothingItem> {
        match category {
            Category::Top => self.top,
            Category::Bottom => self.bottom,
            Category::Outer => self.outer,
            Category::Shoes => self.shoes,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_slots.is_empty()
    }

    /// Short nudge telling the user which essentials to add
    #[must_use]
    pub fn missing_hint(&self) -> Option<&'static str> {
        let top = self.missing_slots.contains(&Category::Top);
        let bottom = self.missing_slots.contains(&Category::Bottom);
        match (top, bottom) {
            (true, true) => Some("add a top and a bottom"),
            (true, false) => Some("add a top"),
            (false, true) => Some("add a bottom"),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Outfit<'static> {
        Outfit {
            top: None,
            bottom: None,
            outer: None,
            shoes: None,
            missing_slots: BTreeSet::new(),
        }
    }

    #[test]
    fn test_missing_hint() {
        let mut outfit = empty();
        assert_eq!(outfit.missing_hint(), None);
        assert!(outfit.is_complete());

        outfit.missing_slots.insert(Category::Bottom);
        assert_eq!(outfit.missing_hint(), Some("add a bottom"));

        outfit.missing_slots.insert(Category::Top);
        assert_eq!(outfit.missing_hint(), Some("add a top and a bottom"));
        assert!(!outfit.is_complete());
    }

    #[test]
    fn test_serializes_missing_slots_as_wire_names() {
        let mut outfit = empty();
        outfit.missing_slots.insert(Category::Top);
        let json = serde_json::to_value(&outfit).unwrap();
        assert_eq!(json["missingSlots"], serde_json::json!(["top"]));
        assert!(json["shoes"].is_null());
    }
}

//! Outfit selection
//!
//! Picks one item per slot from the weather-eligible part of the wardrobe.
//! Each slot draws from its own seed key, so a reroll can change slots
//! independently while identical inputs always give the same outfit.

use std::collections::BTreeSet;

use tracing::trace;

use super::seeded::derive_index;
use crate::models::{Category, ClothingItem, Outfit, WeatherKind};

/// Item tags that qualify for a target weather.
///
/// Cold and rainy requests also admit cooler layering items; warm-only
/// items never qualify for them.
#[must_use]
pub fn allowed_weather(target: WeatherKind) -> &'static [WeatherKind] {
    match target {
        WeatherKind::Mild => &[WeatherKind::Mild],
        WeatherKind::Warm => &[WeatherKind::Warm],
        WeatherKind::Cold => &[WeatherKind::Cold, WeatherKind::Mild],
        WeatherKind::Rainy => &[WeatherKind::Rainy, WeatherKind::Cold, WeatherKind::Mild],
    }
}

/// Seed key for one slot: `location|weather|counter|category`
#[must_use]
pub fn seed_key(location_id: &str, target: WeatherKind, reroll_counter: u32, category: Category) -> String {
    format!("{location_id}|{target}|{reroll_counter}|{category}")
}

/// Select an outfit for `location_id` under `target` weather.
///
/// Items are considered in wardrobe order. Only missing tops and bottoms
/// are reported in `missing_slots`.
#[tracing::instrument(level = "debug", skip(wardrobe), fields(wardrobe_size = wardrobe.len()))]
#[must_use]
pub fn select_outfit<'a>(
    wardrobe: &'a [ClothingItem],
    target: WeatherKind,
    location_id: &str,
    reroll_counter: u32,
) -> Outfit<'a> {
    let allowed = allowed_weather(target);

    let pick = |category: Category| -> Option<&'a ClothingItem> {
        let pool: Vec<&'a ClothingItem> = wardrobe
            .iter()
            .filter(|item| item.category == category && item.suits_any(allowed))
            .collect();
        if pool.is_empty() {
            trace!("No eligible {} items", category);
            return None;
        }
        let key = seed_key(location_id, target, reroll_counter, category);
        let index = derive_index(&key, pool.len());
        trace!("Picked {} #{} of {} with key {}", category, index, pool.len(), key);
        pool.get(index).copied()
    };

    let [top, bottom, outer, shoes] = Category::ALL.map(pick);

    let mut missing_slots = BTreeSet::new();
    if top.is_none() {
        missing_slots.insert(Category::Top);
    }
    if bottom.is_none() {
        missing_slots.insert(Category::Bottom);
    }

    Outfit {
        top,
        bottom,
        outer,
        shoes,
        missing_slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemClassification, ShoeType};
    use rstest::rstest;

    fn item(id: &str, category: Category, tags: &[WeatherKind]) -> ClothingItem {
        ClothingItem::new(
            id,
            format!("file://{id}.jpg"),
            ItemClassification {
                category,
                weather_tags: tags.iter().copied().collect(),
                shoe_type: None,
            },
        )
    }

    fn shoe(id: &str, shoe_type: ShoeType) -> ClothingItem {
        ClothingItem::new(
            id,
            format!("file://{id}.jpg"),
            ItemClassification {
                category: Category::Shoes,
                weather_tags: BTreeSet::new(),
                shoe_type: Some(shoe_type),
            },
        )
    }

    fn sample_wardrobe() -> Vec<ClothingItem> {
        vec![
            item("tee", Category::Top, &[WeatherKind::Warm]),
            item("hoodie", Category::Top, &[WeatherKind::Cold, WeatherKind::Mild]),
            item("sweater", Category::Top, &[WeatherKind::Cold]),
            item("jeans", Category::Bottom, &[WeatherKind::Cold, WeatherKind::Mild]),
            item("shorts", Category::Bottom, &[WeatherKind::Warm]),
            item("raincoat", Category::Outer, &[WeatherKind::Rainy]),
            item("coat", Category::Outer, &[WeatherKind::Cold, WeatherKind::Rainy]),
            shoe("trainers", ShoeType::Sneaker),
            shoe("sandals", ShoeType::Sandal),
            shoe("wellies", ShoeType::RainBoot),
        ]
    }

    #[rstest]
    #[case(WeatherKind::Mild, &[WeatherKind::Mild])]
    #[case(WeatherKind::Warm, &[WeatherKind::Warm])]
    #[case(WeatherKind::Cold, &[WeatherKind::Cold, WeatherKind::Mild])]
    #[case(WeatherKind::Rainy, &[WeatherKind::Rainy, WeatherKind::Cold, WeatherKind::Mild])]
    fn test_allowed_weather(#[case] target: WeatherKind, #[case] expected: &[WeatherKind]) {
        assert_eq!(allowed_weather(target), expected);
    }

    #[test]
    fn test_seed_key_format() {
        assert_eq!(
            seed_key("loc-1", WeatherKind::Rainy, 3, Category::Shoes),
            "loc-1|rainy|3|shoes"
        );
    }

    #[test]
    fn test_selection_is_deterministic() {
        let wardrobe = sample_wardrobe();
        for counter in 0..20 {
            let a = select_outfit(&wardrobe, WeatherKind::Cold, "berlin", counter);
            let b = select_outfit(&wardrobe, WeatherKind::Cold, "berlin", counter);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_picks_respect_weather() {
        let wardrobe = sample_wardrobe();
        for counter in 0..50 {
            let warm = select_outfit(&wardrobe, WeatherKind::Warm, "athens", counter);
            assert_eq!(warm.top.map(|i| i.id.as_str()), Some("tee"));
            assert_eq!(warm.bottom.map(|i| i.id.as_str()), Some("shorts"));
            assert_eq!(warm.outer, None);
            let shoes = warm.shoes.map(|i| i.id.as_str());
            assert!(matches!(shoes, Some("trainers") | Some("sandals")));

            let cold = select_outfit(&wardrobe, WeatherKind::Cold, "oslo", counter);
            assert!(matches!(cold.top.map(|i| i.id.as_str()), Some("hoodie") | Some("sweater")));
            assert_eq!(cold.outer.map(|i| i.id.as_str()), Some("coat"));
            assert_eq!(cold.shoes.map(|i| i.id.as_str()), Some("trainers"));
        }
    }

    #[test]
    fn test_rainy_admits_mild_only_items() {
        let wardrobe = vec![
            item("cardigan", Category::Top, &[WeatherKind::Mild]),
            item("chinos", Category::Bottom, &[WeatherKind::Mild]),
        ];
        let outfit = select_outfit(&wardrobe, WeatherKind::Rainy, "london", 0);
        assert_eq!(outfit.top.map(|i| i.id.as_str()), Some("cardigan"));
        assert_eq!(outfit.bottom.map(|i| i.id.as_str()), Some("chinos"));
        assert!(outfit.is_complete());
    }

    #[test]
    fn test_mild_does_not_admit_rainy_items() {
        let wardrobe = vec![item("raincoat", Category::Outer, &[WeatherKind::Rainy])];
        let outfit = select_outfit(&wardrobe, WeatherKind::Mild, "paris", 0);
        assert_eq!(outfit.outer, None);
    }

    #[test]
    fn test_missing_slots_only_flag_top_and_bottom() {
        let wardrobe = vec![
            item("coat", Category::Outer, &[WeatherKind::Cold]),
            shoe("boots", ShoeType::Boot),
        ];
        let outfit = select_outfit(&wardrobe, WeatherKind::Cold, "oslo", 0);
        assert_eq!(
            outfit.missing_slots,
            BTreeSet::from([Category::Top, Category::Bottom])
        );

        let outfit = select_outfit(&[], WeatherKind::Warm, "oslo", 0);
        assert_eq!(
            outfit.missing_slots,
            BTreeSet::from([Category::Top, Category::Bottom])
        );
        assert_eq!(outfit.outer, None);
        assert_eq!(outfit.shoes, None);
    }

    #[test]
    fn test_pick_matches_derived_index() {
        let wardrobe: Vec<ClothingItem> = (0..5)
            .map(|i| item(&format!("top-{i}"), Category::Top, &[WeatherKind::Mild]))
            .collect();
        let outfit = select_outfit(&wardrobe, WeatherKind::Mild, "loc-1", 0);
        // "loc-1|mild|0|top" lands on index 2 of 5
        assert_eq!(outfit.top.map(|i| i.id.as_str()), Some("top-2"));

        let outfit = select_outfit(&wardrobe, WeatherKind::Mild, "loc-1", 1);
        assert_eq!(outfit.top.map(|i| i.id.as_str()), Some("top-0"));
    }

    #[test]
    fn test_reroll_usually_changes_pick() {
        let wardrobe: Vec<ClothingItem> = (0..4)
            .map(|i| item(&format!("top-{i}"), Category::Top, &[WeatherKind::Warm]))
            .collect();
        let trials = 1_000;
        let changed = (0..trials)
            .filter(|n| {
                let location = format!("loc-{n}");
                let before = select_outfit(&wardrobe, WeatherKind::Warm, &location, 0).top;
                let after = select_outfit(&wardrobe, WeatherKind::Warm, &location, 1).top;
                before != after
            })
            .count();
        // independent uniform picks over 4 items differ 75% of the time
        assert!(changed > trials * 6 / 10, "only {changed} of {trials} rerolls changed");
    }
}

//! Vision classifier replies
//!
//! The vision model is asked for a bare JSON record but tends to wrap it in
//! Markdown fences or prose. [`parse_reply`] digs the record out and hands
//! it to the normalizer as a [`RawClassification`].

use serde_json::Value;
use tracing::debug;

use super::normalizer::RawClassification;
use crate::{OutfindError, Result};

/// Instruction text sent alongside the clothing photo
pub const CLASSIFICATION_PROMPT: &str = r#"Analyze this clothing image.

Return ONLY valid JSON:

{
  "category": "top | bottom | outer | shoes",
  "weatherTags": ["cold","mild"] | ["cold"] | ["mild"] | ["warm"] | ["rainy"] | ["cold","mild","warm"] | ["cold","rainy"],
  "shoeType": "sneaker | boot | sandal | rain_boot | null"
}

Rules:
- If the item is shoes, category MUST be "shoes".
- Sneakers, trainers, running shoes -> shoeType "sneaker"
- Boots (leather/ankle boots/winter boots) -> shoeType "boot"
- Sandals/slippers -> shoeType "sandal"
- Rain boots -> shoeType "rain_boot"

Non-shoes:
- Hoodies, sweatshirts, knitwear, fleece -> ["cold","mild"]
- Jeans / denim pants -> ["cold","mild"]
- T-shirts -> ["warm"]
- Jackets / coats -> ["cold","rainy"]
- Raincoats -> ["rainy"]

If it is a jacket, coat or heavy outer, include "rainy" in tags if it looks usable in rain.
Only JSON, no explanation.
"#;

/// Extract the classification record from a free-form model reply
pub fn parse_reply(text: &str) -> Result<RawClassification> {
    let json = extract_json(text).ok_or_else(|| {
        debug!("Vision reply without a JSON object: {:?}", text);
        OutfindError::vision("reply contains no JSON object")
    })?;

    let value: Value = serde_json::from_str(&json).map_err(|e| {
        debug!("Vision reply JSON did not parse: {}", e);
        OutfindError::vision(format!("reply JSON is malformed: {e}"))
    })?;

    Ok(RawClassification::from_value(&value))
}

/// Drop Markdown fences, then slice from the first `{` to the last `}`
fn extract_json(text: &str) -> Option<String> {
    let unfenced = strip_fences(text);
    let start = unfenced.find('{')?;
    let end = unfenced.rfind('}')?;
    (start < end).then(|| unfenced[start..=end].to_string())
}

/// Remove every ```` ``` ```` marker and a `json` language tag right after it
fn strip_fences(text: &str) -> String {
    text.split("```")
        .enumerate()
        .map(|(i, part)| match part.get(..4) {
            Some(tag) if i > 0 && tag.eq_ignore_ascii_case("json") => &part[4..],
            _ => part,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ShoeType, WeatherKind};
    use crate::wardrobe::normalize;

    #[test]
    fn test_fenced_reply() {
        let reply = "```json\n{\"category\":\"shoes\",\"weatherTags\":[\"warm\"],\"shoeType\":\"boot\"}\n```";
        let raw = parse_reply(reply).unwrap();
        assert_eq!(raw.category.as_deref(), Some("shoes"));
        assert_eq!(raw.shoe_type.as_deref(), Some("boot"));

        let classification = normalize(&raw);
        assert_eq!(classification.shoe_type, Some(ShoeType::Boot));
        assert!(!classification.weather_tags.contains(&WeatherKind::Warm));
    }

    #[test]
    fn test_fence_inside_record() {
        let reply = "```json\n{\"category\":\"top\"\n```\n```JSON\n,\"weatherTags\":[\"warm\"]}\n```";
        let raw = parse_reply(reply).unwrap();
        assert_eq!(raw.category.as_deref(), Some("top"));
        assert_eq!(raw.weather_tags, Some(vec!["warm".to_string()]));
    }

    #[test]
    fn test_strip_fences_keeps_plain_text() {
        assert_eq!(strip_fences("no fences {}"), "no fences {}");
        assert_eq!(strip_fences("```Json\n{}\n```"), "\n{}\n");
        assert_eq!(strip_fences("```jsonl```"), "l");
    }

    #[test]
    fn test_reply_with_prose() {
        let reply = "Sure! Here you go: {\"category\": \"Outer\", \"weatherTags\": [\"cold\", \"rainy\"]} Hope it helps.";
        let raw = parse_reply(reply).unwrap();
        assert_eq!(normalize(&raw).category, Category::Outer);
    }

    #[test]
    fn test_reply_without_json() {
        let err = parse_reply("I cannot see any clothing here.").unwrap_err();
        assert!(matches!(err, OutfindError::Vision { .. }));

        let err = parse_reply("} backwards {").unwrap_err();
        assert!(matches!(err, OutfindError::Vision { .. }));
    }

    #[test]
    fn test_reply_with_broken_json() {
        let err = parse_reply("```json\n{\"category\": top}\n```").unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_prompt_mentions_every_shoe_type() {
        for shoe in ["sneaker", "boot", "sandal", "rain_boot"] {
            assert!(CLASSIFICATION_PROMPT.contains(shoe));
        }
    }
}

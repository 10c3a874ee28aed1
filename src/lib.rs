//! `Outfind` - weather-aware outfit recommendations
//!
//! This library provides the pure recommendation core: classifying the
//! weather, normalizing untrusted clothing classifications, and picking a
//! reproducible outfit that only changes when the user asks for a reroll.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod outfit;
pub mod wardrobe;
pub mod weather;

// Re-export core types for public API
pub use config::OutfindConfig;
pub use error::OutfindError;
pub use models::{Category, ClothingItem, ItemClassification, Outfit, ShoeType, WeatherKind, WeatherObservation};
pub use outfit::{RerollState, derive_index, select_outfit};
pub use wardrobe::{RawClassification, normalize, parse_reply};
pub use weather::classify;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, OutfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! Data models for the Outfind application
//!
//! This module contains the core domain models organized by concern:
//! - Weather: buckets and the observations they come from
//! - Clothing: categories, shoe types and normalized wardrobe items
//! - Outfit: the per-slot recommendation handed to the renderer

pub mod clothing;
pub mod outfit;
pub mod weather;

// Re-export all public types for convenient access
pub use clothing::{Category, ClothingItem, ItemClassification, ShoeType};
pub use outfit::Outfit;
pub use weather::{WeatherKind, WeatherObservation};

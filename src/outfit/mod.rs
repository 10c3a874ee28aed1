//! Outfit module
//!
//! This module turns a wardrobe and a weather bucket into a recommendation:
//! - Seeded, platform-independent index derivation
//! - Weather eligibility and per-slot selection
//! - Caller-owned reroll counters

pub mod reroll;
pub mod seeded;
pub mod selector;

pub use reroll::RerollState;
pub use seeded::{Mulberry32, derive_index, fnv1a_32};
pub use selector::{allowed_weather, seed_key, select_outfit};

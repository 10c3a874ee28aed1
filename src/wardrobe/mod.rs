//! Wardrobe module
//!
//! Everything between a clothing photo's classification and the wardrobe:
//! - Extraction of the record from a vision model reply
//! - Normalization of that record into a canonical classification
//! - Closet views (counts, filtering, add/remove)

pub mod closet;
pub mod normalizer;
pub mod vision;

pub use closet::{CategoryCounts, add_item, category_counts, filter_by_category, remove_item};
pub use normalizer::{RawClassification, normalize};
pub use vision::{CLASSIFICATION_PROMPT, parse_reply};

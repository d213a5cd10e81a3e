//! Classification domain - multi-label review classification and grouping
//!
//! ```text
//! reviews → ReviewClassifier → ClassifiedReview[] → aggregate_by_category → CategoryMap
//! ```

pub mod aggregator;
pub mod classifier;
pub mod models;

pub use aggregator::{aggregate_by_category, CategoryMap};
pub use classifier::{sigmoid, ClassificationError, ReviewClassifier, DEFAULT_THRESHOLD};
pub use models::{Category, ClassifiedReview};

//! Multi-label review classification.
//!
//! The model produces one independent logit per category; a category is
//! assigned when its sigmoid probability reaches the threshold (inclusive).

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::models::{Category, ClassifiedReview};
use crate::kernel::BaseCategoryModel;

/// Default inclusive probability threshold.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[derive(Debug, Error)]
pub enum ClassificationError {
    /// The model does not produce one output per category
    #[error("model has {found} outputs, expected {expected}")]
    LabelCount { expected: usize, found: usize },

    /// Inference failed for the batch
    #[error("inference failed: {0}")]
    Inference(String),

    /// The model returned a different number of rows than inputs
    #[error("model returned {found} results for {expected} reviews")]
    ResultCount { expected: usize, found: usize },

    /// No results for a non-empty input
    #[error("classifier returned no results")]
    Empty,
}

/// Classifies reviews with a loaded model.
///
/// Holds the model read-only; share it across requests behind an `Arc`.
pub struct ReviewClassifier {
    model: Arc<dyn BaseCategoryModel>,
    threshold: f32,
}

impl ReviewClassifier {
    /// Wrap a loaded model. Fails if the model's output width is not the category count.
    pub fn new(model: Arc<dyn BaseCategoryModel>) -> Result<Self, ClassificationError> {
        let found = model.num_labels();
        if found != Category::COUNT {
            return Err(ClassificationError::LabelCount {
                expected: Category::COUNT,
                found,
            });
        }

        Ok(Self {
            model,
            threshold: DEFAULT_THRESHOLD,
        })
    }

    /// Set the threshold used by [`ReviewClassifier::classify`].
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Classify with the configured threshold.
    pub fn classify(&self, reviews: &[String]) -> Result<Vec<ClassifiedReview>, ClassificationError> {
        self.classify_reviews(reviews, self.threshold)
    }

    /// Classify a batch in one forward pass. Output has the same length and order as `reviews`.
    pub fn classify_reviews(
        &self,
        reviews: &[String],
        threshold: f32,
    ) -> Result<Vec<ClassifiedReview>, ClassificationError> {
        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let logits = self
            .model
            .logits(reviews)
            .map_err(|e| ClassificationError::Inference(format!("{:#}", e)))?;

        if logits.len() != reviews.len() {
            return Err(ClassificationError::ResultCount {
                expected: reviews.len(),
                found: logits.len(),
            });
        }

        let classified: Vec<ClassifiedReview> = reviews
            .iter()
            .zip(logits)
            .map(|(review, row)| ClassifiedReview::new(review.clone(), assign(&row, threshold)))
            .collect();

        debug!(
            reviews = classified.len(),
            unclassified = classified.iter().filter(|c| c.is_unclassified()).count(),
            threshold,
            "Classified review batch"
        );

        Ok(classified)
    }
}

/// Categories whose probability reaches `threshold`, in category order.
fn assign(logits: &[f32], threshold: f32) -> Vec<Category> {
    logits
        .iter()
        .enumerate()
        .filter(|(_, logit)| sigmoid(**logit) >= threshold)
        .filter_map(|(index, _)| Category::from_index(index))
        .collect()
}

pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

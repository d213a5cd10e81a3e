//! Server dependencies for the analysis pipeline (using traits for testability)
//!
//! This module provides the dependency container every pipeline invocation
//! borrows from. External services sit behind trait objects; the classifier
//! holds the model loaded once at start-up and is shared read-only.

use anyhow::{Context, Result};
use ollama_client::OllamaClient;
use reviews_client::ReviewsClient;
use std::sync::Arc;

use crate::config::Config;
use crate::domains::classification::{Category, ReviewClassifier};
use crate::kernel::{
    BaseAI, BaseReviewSource, BertCategoryModel, OllamaAI, RapidApiReviewSource,
};

/// Server dependencies accessible to the pipeline (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub review_source: Arc<dyn BaseReviewSource>,
    pub ai: Arc<dyn BaseAI>,
    pub classifier: Arc<ReviewClassifier>,
}

impl ServerDeps {
    pub fn new(
        review_source: Arc<dyn BaseReviewSource>,
        ai: Arc<dyn BaseAI>,
        classifier: Arc<ReviewClassifier>,
    ) -> Self {
        Self {
            review_source,
            ai,
            classifier,
        }
    }

    /// Build production dependencies. Loads the classification model, which is
    /// the only fatal initialization step.
    pub fn from_config(config: &Config) -> Result<Self> {
        let reviews_client = ReviewsClient::new(config.rapidapi_key.clone())
            .with_host(&config.rapidapi_host)
            .with_timeout(config.reviews_timeout)
            .context("Failed to create review API client")?;
        let review_source = RapidApiReviewSource::new(reviews_client)
            .with_country(&config.reviews_country)
            .with_sort(&config.reviews_sort);

        let ollama = OllamaClient::new(&config.ollama_url)
            .with_timeout(config.summary_timeout)
            .context("Failed to create Ollama client")?;
        let ai = OllamaAI::new(ollama, &config.ollama_model);

        let model = BertCategoryModel::load(
            &config.model_checkpoint_path,
            Category::COUNT,
            config.max_token_length,
        )
        .with_context(|| {
            format!(
                "Failed to load classification model from {}",
                config.model_checkpoint_path.display()
            )
        })?;
        let classifier = ReviewClassifier::new(Arc::new(model))?
            .with_threshold(config.classification_threshold);

        Ok(Self::new(
            Arc::new(review_source),
            Arc::new(ai),
            Arc::new(classifier),
        ))
    }
}

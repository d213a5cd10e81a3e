//! Analysis actions - the end-to-end pipeline
//!
//! ```text
//! link → ProductId → reviews → ClassifiedReview[] → CategoryMap → narrative → Report
//! ```
//!
//! Stages run strictly in sequence and the first failure ends the run.

use std::sync::Arc;

use tracing::info;

use super::data::{PredictResponse, Report};
use super::error::AnalysisError;
use crate::domains::classification::{
    aggregate_by_category, ClassificationError, ClassifiedReview, ReviewClassifier,
};
use crate::domains::reviews::{fetch_all_reviews, FetchError, ProductId};
use crate::domains::summarization::{parse_narrative, summarize_reviews};
use crate::kernel::ServerDeps;

/// Resolve, fetch and classify. `threshold` overrides the classifier's configured one.
pub async fn classify_link(
    link: &str,
    threshold: Option<f32>,
    deps: &ServerDeps,
) -> Result<Vec<ClassifiedReview>, AnalysisError> {
    let product_id = ProductId::from_link(link)?;
    info!(product_id = %product_id, "Resolved product identifier");

    let reviews = fetch_all_reviews(deps.review_source.as_ref(), &product_id).await?;
    if reviews.is_empty() {
        return Err(FetchError::NoReviews.into());
    }

    let threshold = threshold.unwrap_or_else(|| deps.classifier.threshold());
    let classified = run_classifier(deps.classifier.clone(), reviews, threshold).await?;

    info!(
        product_id = %product_id,
        reviews = classified.len(),
        threshold,
        "Classified reviews"
    );
    Ok(classified)
}

/// Full pipeline up to the raw narrative.
pub async fn summarize_link(
    link: &str,
    threshold: Option<f32>,
    deps: &ServerDeps,
) -> Result<PredictResponse, AnalysisError> {
    let classified = classify_link(link, threshold, deps).await?;

    let categories = aggregate_by_category(&classified);
    info!(
        categories = categories.len(),
        assignments = categories.assignment_count(),
        "Grouped reviews by category"
    );

    let conclusion = summarize_reviews(deps.ai.as_ref(), &categories).await;
    if conclusion.is_empty() {
        return Err(AnalysisError::Summarization);
    }

    Ok(PredictResponse {
        conclusion,
        categories,
    })
}

/// Full pipeline, with the narrative parsed into scores and summary.
pub async fn analyze_link(
    link: &str,
    threshold: Option<f32>,
    deps: &ServerDeps,
) -> Result<Report, AnalysisError> {
    let PredictResponse {
        conclusion,
        categories,
    } = summarize_link(link, threshold, deps).await?;

    let parsed = parse_narrative(&conclusion);
    info!(scores = parsed.scores.len(), "Parsed summary report");

    Ok(Report {
        scores: parsed.scores,
        summary: parsed.summary,
        categories,
    })
}

/// Inference is CPU-bound; keep it off the async workers.
async fn run_classifier(
    classifier: Arc<ReviewClassifier>,
    reviews: Vec<String>,
    threshold: f32,
) -> Result<Vec<ClassifiedReview>, AnalysisError> {
    let expected = reviews.len();
    let classified = tokio::task::spawn_blocking(move || {
        classifier.classify_reviews(&reviews, threshold)
    })
    .await
    .map_err(|e| ClassificationError::Inference(format!("classification task failed: {}", e)))??;

    if classified.is_empty() && expected > 0 {
        return Err(ClassificationError::Empty.into());
    }
    Ok(classified)
}

//! Request and response shapes of the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::domains::classification::{CategoryMap, ClassifiedReview};
use crate::domains::summarization::ScoreTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub link: String,
}

/// Raw narrative plus grouped reviews. Scores stay embedded in `conclusion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub conclusion: String,
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub classified_reviews: Vec<ClassifiedReview>,
}

/// Fully parsed result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub scores: ScoreTable,
    pub summary: String,
    pub categories: CategoryMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

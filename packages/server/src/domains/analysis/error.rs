use thiserror::Error;

use crate::domains::classification::ClassificationError;
use crate::domains::reviews::{FetchError, InvalidLinkError};

/// Which pipeline stage failed, and why.
///
/// The first fatal stage ends the run; later stages never execute.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidLink(#[from] InvalidLinkError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("classification failed: {0}")]
    Classification(#[from] ClassificationError),

    /// The generative service failed or returned no text
    #[error("summarization failed")]
    Summarization,
}

impl AnalysisError {
    /// Stable machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidLink(_) => "invalid_link",
            AnalysisError::Fetch(FetchError::NoReviews) => "no_reviews",
            AnalysisError::Fetch(_) => "fetch_failed",
            AnalysisError::Classification(_) => "classification_failed",
            AnalysisError::Summarization => "summarization_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let invalid: AnalysisError = InvalidLinkError {
            link: "x".to_string(),
        }
        .into();
        assert_eq!(invalid.kind(), "invalid_link");
        assert_eq!(invalid.to_string(), "no product identifier found in link");

        assert_eq!(AnalysisError::from(FetchError::NoReviews).kind(), "no_reviews");
        assert_eq!(
            AnalysisError::from(FetchError::MalformedResponse).kind(),
            "fetch_failed"
        );
        assert_eq!(
            AnalysisError::from(ClassificationError::Empty).kind(),
            "classification_failed"
        );
        assert_eq!(AnalysisError::Summarization.kind(), "summarization_failed");
        assert_eq!(AnalysisError::Summarization.to_string(), "summarization failed");
    }
}

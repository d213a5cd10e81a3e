// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (pagination, thresholds, prompt layout) lives in the domains
// and is written against these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseReviewSource)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::reviews::ProductId;

// =============================================================================
// Review Source Trait (Infrastructure - third-party review API)
// =============================================================================

/// One page of reviews as reported by the review source.
///
/// Both fields are optional because upstream responses are not guaranteed to
/// be well-formed; the fetcher decides which omissions are fatal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcePage {
    /// Total reviews for the product across all pages
    pub total_reviews: Option<u64>,
    /// Review entries on this page, `None` when the page has no review list
    pub reviews: Option<Vec<SourceReview>>,
}

impl SourcePage {
    /// Well-formed page with the given comments.
    pub fn with_comments(total_reviews: u64, comments: &[&str]) -> Self {
        Self {
            total_reviews: Some(total_reviews),
            reviews: Some(
                comments
                    .iter()
                    .map(|c| SourceReview {
                        comment: Some(c.to_string()),
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceReview {
    pub comment: Option<String>,
}

#[async_trait]
pub trait BaseReviewSource: Send + Sync {
    /// Fetch a single page of reviews (pages are 1-based)
    async fn fetch_page(&self, product_id: &ProductId, page: u64) -> Result<SourcePage>;
}

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;
}

// =============================================================================
// Category Model Trait (Infrastructure - multi-label sequence classifier)
// =============================================================================

/// A loaded multi-label text classifier.
///
/// Inference is synchronous and CPU/accelerator bound; async callers should
/// run it on the blocking pool.
pub trait BaseCategoryModel: Send + Sync {
    /// Number of independent outputs per input
    fn num_labels(&self) -> usize;

    /// Raw logits, one row of `num_labels` values per input, in input order.
    /// The whole batch runs as one forward pass.
    fn logits(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

//! Paginated review retrieval.
//!
//! Page 1 tells us how many reviews exist. Its failure is fatal. Later pages
//! are fetched strictly in order and a failed or malformed page is skipped,
//! so the result is every review that could be retrieved, in page-then-entry
//! order.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::identifier::ProductId;
use crate::kernel::{BaseReviewSource, SourcePage};

/// Upstream page size.
pub const REVIEWS_PER_PAGE: u64 = 10;

/// Text used for a review entry without a comment.
pub const MISSING_COMMENT: &str = "No Comment";

#[derive(Debug, Error)]
pub enum FetchError {
    /// The first page request failed (transport, status, or undecodable body).
    /// Upstream detail is logged, not carried.
    #[error("first review page request failed")]
    Request,

    /// The first page did not carry the total review count
    #[error("first review page is missing the total review count")]
    MalformedResponse,

    /// Retrieval succeeded but produced no reviews at all
    #[error("no reviews retrieved")]
    NoReviews,
}

/// Number of pages needed for `total_reviews` reviews.
pub fn page_count(total_reviews: u64) -> u64 {
    total_reviews.div_ceil(REVIEWS_PER_PAGE)
}

/// Retrieve every available review text for a product.
///
/// An empty result is not an error here; callers decide what zero reviews means.
pub async fn fetch_all_reviews(
    source: &dyn BaseReviewSource,
    product_id: &ProductId,
) -> Result<Vec<String>, FetchError> {
    let first = source
        .fetch_page(product_id, 1)
        .await
        .map_err(|e| {
            warn!(product_id = %product_id, error = %format!("{:#}", e), "First review page request failed");
            FetchError::Request
        })?;

    let total_reviews = first.total_reviews.ok_or(FetchError::MalformedResponse)?;
    let pages = page_count(total_reviews);
    info!(product_id = %product_id, total_reviews, pages, "Fetching reviews");

    let mut reviews = Vec::with_capacity(total_reviews.min(1_000) as usize);
    if let Some(texts) = page_texts(&first) {
        reviews.extend(texts);
    }

    for page in 2..=pages {
        match source.fetch_page(product_id, page).await {
            Ok(response) => match page_texts(&response) {
                Some(texts) => {
                    debug!(page, count = texts.len(), "Fetched review page");
                    reviews.extend(texts);
                }
                None => {
                    warn!(product_id = %product_id, page, "Review page has no review list, skipping");
                }
            },
            Err(e) => {
                warn!(product_id = %product_id, page, error = %format!("{:#}", e), "Review page request failed, skipping");
            }
        }
    }

    info!(product_id = %product_id, count = reviews.len(), "Fetched reviews");
    Ok(reviews)
}

fn page_texts(page: &SourcePage) -> Option<Vec<String>> {
    page.reviews.as_ref().map(|entries| {
        entries
            .iter()
            .map(|entry| {
                entry
                    .comment
                    .clone()
                    .unwrap_or_else(|| MISSING_COMMENT.to_string())
            })
            .collect()
    })
}

use serde::{Deserialize, Serialize};

/// Query parameters for the `product-reviews` endpoint.
///
/// Everything except the page index stays fixed across the pages of one product.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewQuery {
    pub asin: String,
    pub country: String,
    pub sort_by: String,
}

impl ReviewQuery {
    pub fn new(asin: impl Into<String>) -> Self {
        Self {
            asin: asin.into(),
            country: "TR".to_string(),
            sort_by: "TOP_REVIEWS".to_string(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    /// Query string pairs for a single page request (pages are 1-based).
    pub fn params(&self, page: u64) -> Vec<(&'static str, String)> {
        vec![
            ("asin", self.asin.clone()),
            ("country", self.country.clone()),
            ("sort_by", self.sort_by.clone()),
            ("star_rating", "ALL".to_string()),
            ("verified_purchases_only", "false".to_string()),
            ("images_or_videos_only", "false".to_string()),
            ("current_format_only", "false".to_string()),
            ("page", page.to_string()),
        ]
    }
}

/// Top-level response of the `product-reviews` endpoint.
///
/// Only the fields the pipeline reads are modelled; everything else upstream
/// sends is ignored, whatever its type. Every field is optional: the upstream
/// format is not guaranteed and callers decide which omissions are fatal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPage {
    pub data: Option<ReviewPageData>,
}

impl ReviewPage {
    /// Total number of reviews the product has across all pages.
    pub fn total_reviews(&self) -> Option<u64> {
        self.data.as_ref().and_then(|d| d.total_reviews)
    }

    /// Review entries carried by this page, if the page has a review list at all.
    pub fn reviews(&self) -> Option<&[ReviewEntry]> {
        self.data.as_ref().and_then(|d| d.reviews.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPageData {
    pub total_reviews: Option<u64>,
    pub reviews: Option<Vec<ReviewEntry>>,
}

/// A single review from the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewEntry {
    pub review_comment: Option<String>,
}

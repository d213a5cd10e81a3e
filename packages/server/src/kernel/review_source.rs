use anyhow::{Context, Result};
use async_trait::async_trait;
use reviews_client::{ReviewPage, ReviewQuery, ReviewsClient};

use super::{BaseReviewSource, SourcePage, SourceReview};
use crate::domains::reviews::ProductId;

/// Review source backed by the RapidAPI product-reviews endpoint
pub struct RapidApiReviewSource {
    client: ReviewsClient,
    country: String,
    sort_by: String,
}

impl RapidApiReviewSource {
    pub fn new(client: ReviewsClient) -> Self {
        Self {
            client,
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
}

#[async_trait]
impl BaseReviewSource for RapidApiReviewSource {
    async fn fetch_page(&self, product_id: &ProductId, page: u64) -> Result<SourcePage> {
        let query = ReviewQuery::new(product_id.as_str())
            .with_country(&self.country)
            .with_sort(&self.sort_by);

        let response = self
            .client
            .get_review_page(&query, page)
            .await
            .with_context(|| format!("review page {} request failed", page))?;

        Ok(to_source_page(response))
    }
}

fn to_source_page(page: ReviewPage) -> SourcePage {
    let Some(data) = page.data else {
        return SourcePage::default();
    };

    SourcePage {
        total_reviews: data.total_reviews,
        reviews: data.reviews.map(|entries| {
            entries
                .into_iter()
                .map(|entry| SourceReview {
                    comment: entry.review_comment,
                })
                .collect()
        }),
    }
}

//! Pure product-review REST API client.
//!
//! A minimal client for the RapidAPI "real-time Amazon data" service. Fetches
//! one page of product reviews per call; pagination policy belongs to callers.
//!
//! # Example
//!
//! ```rust,ignore
//! use reviews_client::{ReviewQuery, ReviewsClient};
//!
//! let client = ReviewsClient::new("your-rapidapi-key".into());
//! let query = ReviewQuery::new("B07TPWWH77").with_country("TR");
//!
//! let page = client.get_review_page(&query, 1).await?;
//! println!("{:?} reviews in total", page.total_reviews());
//! ```

pub mod error;
pub mod types;

pub use error::{ReviewsError, Result};
pub use types::{ReviewEntry, ReviewPage, ReviewPageData, ReviewQuery};

use std::time::Duration;

pub const DEFAULT_HOST: &str = "real-time-amazon-data.p.rapidapi.com";

#[derive(Clone)]
pub struct ReviewsClient {
    client: reqwest::Client,
    api_key: String,
    host: String,
    base_url: String,
}

impl ReviewsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            host: DEFAULT_HOST.to_string(),
            base_url: format!("https://{}", DEFAULT_HOST),
        }
    }

    /// Use a different RapidAPI host. Also points the base URL at that host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self.base_url = format!("https://{}", self.host);
        self
    }

    /// Override the base URL only (proxies, test servers). The host header is unchanged.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single page of reviews. `page` is 1-based.
    pub async fn get_review_page(&self, query: &ReviewQuery, page: u64) -> Result<ReviewPage> {
        let url = format!("{}/product-reviews", self.base_url);
        tracing::debug!(asin = %query.asin, page, "Requesting review page");

        let resp = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .query(&query.params(page))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ReviewsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ReviewsError::Parse(e.to_string()))
    }
}

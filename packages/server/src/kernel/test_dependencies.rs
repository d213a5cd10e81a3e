// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseCategoryModel, BaseReviewSource, ServerDeps, SourcePage};
use crate::domains::classification::{Category, ReviewClassifier};
use crate::domains::reviews::ProductId;

// =============================================================================
// Mock Review Source
// =============================================================================

pub struct MockReviewSource {
    pages: Arc<Mutex<HashMap<u64, SourcePage>>>,
    failing_pages: Arc<Mutex<HashMap<u64, String>>>,
    calls: Arc<Mutex<Vec<(String, u64)>>>,
}

impl MockReviewSource {
    pub fn new() -> Self {
        Self {
            pages: Arc::new(Mutex::new(HashMap::new())),
            failing_pages: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve `response` for page `page`
    pub fn with_page(self, page: u64, response: SourcePage) -> Self {
        self.pages.lock().unwrap().insert(page, response);
        self
    }

    /// Fail requests for page `page`
    pub fn with_failing_page(self, page: u64) -> Self {
        let message = format!("mock review source: page {} unavailable", page);
        self.with_page_error(page, message)
    }

    /// Fail requests for page `page` with `message` as the upstream error
    pub fn with_page_error(self, page: u64, message: impl Into<String>) -> Self {
        self.failing_pages.lock().unwrap().insert(page, message.into());
        self
    }

    /// Page indexes requested, in request order
    pub fn requested_pages(&self) -> Vec<u64> {
        self.calls.lock().unwrap().iter().map(|(_, p)| *p).collect()
    }

    /// Product identifiers requested, in request order
    pub fn requested_products(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(id, _)| id.clone()).collect()
    }
}

impl Default for MockReviewSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseReviewSource for MockReviewSource {
    async fn fetch_page(&self, product_id: &ProductId, page: u64) -> Result<SourcePage> {
        self.calls
            .lock()
            .unwrap()
            .push((product_id.to_string(), page));

        if let Some(message) = self.failing_pages.lock().unwrap().get(&page) {
            return Err(anyhow!("{}", message));
        }

        self.pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .ok_or_else(|| anyhow!("mock review source: no page {}", page))
    }
}

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

pub struct MockAI {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    /// Make every call fail as if the service were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.contains(text))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());

        if self.fail {
            return Err(anyhow!("mock AI: connection refused"));
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            // Return default mock response
            Ok("Mock AI response".to_string())
        }
    }
}

// =============================================================================
// Mock Category Model
// =============================================================================

/// Logit that maps to a probability well below any sensible threshold.
const NEGATIVE_LOGIT: f32 = -6.0;

pub struct MockCategoryModel {
    logits: HashMap<String, Vec<f32>>,
    num_labels: usize,
    fail: bool,
    batches: Arc<Mutex<Vec<usize>>>,
}

impl MockCategoryModel {
    pub fn new() -> Self {
        Self {
            logits: HashMap::new(),
            num_labels: Category::COUNT,
            fail: false,
            batches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return `logits` whenever `text` is classified. Unknown texts get no category.
    pub fn with_logits(mut self, text: impl Into<String>, logits: [f32; 4]) -> Self {
        self.logits.insert(text.into(), logits.to_vec());
        self
    }

    /// Assign exactly `categories` to `text`
    pub fn with_categories(self, text: impl Into<String>, categories: &[Category]) -> Self {
        let mut logits = [NEGATIVE_LOGIT; 4];
        for category in categories {
            logits[*category as usize] = -NEGATIVE_LOGIT;
        }
        self.with_logits(text, logits)
    }

    pub fn with_num_labels(mut self, num_labels: usize) -> Self {
        self.num_labels = num_labels;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Batch sizes of every inference call
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.lock().unwrap().clone()
    }
}

impl Default for MockCategoryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseCategoryModel for MockCategoryModel {
    fn num_labels(&self) -> usize {
        self.num_labels
    }

    fn logits(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.batches.lock().unwrap().push(texts.len());

        if self.fail {
            return Err(anyhow!("mock model: inference failed"));
        }

        Ok(texts
            .iter()
            .map(|text| {
                self.logits
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| vec![NEGATIVE_LOGIT; self.num_labels])
            })
            .collect())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub review_source: Arc<MockReviewSource>,
    pub ai: Arc<MockAI>,
    pub model: Arc<MockCategoryModel>,
    pub threshold: f32,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            review_source: Arc::new(MockReviewSource::new()),
            ai: Arc::new(MockAI::new()),
            model: Arc::new(MockCategoryModel::new()),
            threshold: crate::domains::classification::DEFAULT_THRESHOLD,
        }
    }

    /// Set a mock review source
    pub fn mock_reviews(mut self, source: MockReviewSource) -> Self {
        self.review_source = Arc::new(source);
        self
    }

    /// Set a mock AI
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Set a mock classification model
    pub fn mock_model(mut self, model: MockCategoryModel) -> Self {
        self.model = Arc::new(model);
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Convert into ServerDeps for testing. Mocks stay inspectable through `self`.
    pub fn to_deps(&self) -> ServerDeps {
        let classifier = ReviewClassifier::new(self.model.clone())
            .unwrap_or_else(|e| panic!("mock model rejected: {}", e))
            .with_threshold(self.threshold);

        ServerDeps::new(
            self.review_source.clone(),
            self.ai.clone(),
            Arc::new(classifier),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

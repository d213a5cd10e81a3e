//! Single non-streaming call to the generative service.

use tracing::{error, info};

use super::prompts::build_summary_prompt;
use crate::domains::classification::CategoryMap;
use crate::kernel::BaseAI;

/// Summarize grouped reviews. Returns the trimmed narrative, or an empty
/// string when the service fails; callers treat empty as a failed summary.
pub async fn summarize_reviews(ai: &dyn BaseAI, categories: &CategoryMap) -> String {
    let prompt = build_summary_prompt(categories);

    info!(
        categories = categories.len(),
        prompt_chars = prompt.chars().count(),
        "Requesting review summary"
    );

    match ai.complete(&prompt).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            error!(error = %format!("{:#}", e), "Summary request failed");
            String::new()
        }
    }
}

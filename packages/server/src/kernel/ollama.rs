use anyhow::{Context, Result};
use async_trait::async_trait;
use ollama_client::OllamaClient;

use super::BaseAI;

/// BaseAI implementation backed by an Ollama server
pub struct OllamaAI {
    client: OllamaClient,
    model: String,
}

impl OllamaAI {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseAI for OllamaAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.client
            .complete(&self.model, prompt)
            .await
            .with_context(|| format!("Ollama generation with {} failed", self.model))
    }
}

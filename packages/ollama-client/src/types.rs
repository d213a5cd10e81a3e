//! Ollama API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Generate
// =============================================================================

/// Text generation request for `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model to use (e.g., "llama3")
    pub model: String,

    /// Full prompt text
    pub prompt: String,

    /// Whether to stream partial responses. This client only reads whole responses.
    pub stream: bool,

    /// Sampling options passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

impl GenerateRequest {
    /// Create a non-streaming request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options: None,
        }
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options.get_or_insert_with(GenerateOptions::default).temperature = Some(temperature);
        self
    }
}

/// Model options for a generate request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Non-streaming response from `/api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,

    /// Generated text
    pub response: String,

    #[serde(default)]
    pub done: Option<bool>,

    /// Number of tokens in the response
    #[serde(default)]
    pub eval_count: Option<u32>,
}

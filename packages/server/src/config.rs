use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub reviews_country: String,
    pub reviews_sort: String,
    pub reviews_timeout: Duration,
    pub ollama_url: String,
    pub ollama_model: String,
    pub summary_timeout: Duration,
    pub model_checkpoint_path: PathBuf,
    pub classification_threshold: f32,
    pub max_token_length: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let classification_threshold: f32 = parse_or("CLASSIFICATION_THRESHOLD", 0.5)?;
        if !(0.0..=1.0).contains(&classification_threshold) {
            bail!("CLASSIFICATION_THRESHOLD must be between 0 and 1");
        }

        Ok(Self {
            port: parse_or("PORT", 4000)?,
            rapidapi_key: env::var("RAPIDAPI_KEY").context("RAPIDAPI_KEY must be set")?,
            rapidapi_host: env::var("RAPIDAPI_HOST")
                .unwrap_or_else(|_| reviews_client::DEFAULT_HOST.to_string()),
            reviews_country: env::var("REVIEWS_COUNTRY").unwrap_or_else(|_| "TR".to_string()),
            reviews_sort: env::var("REVIEWS_SORT").unwrap_or_else(|_| "TOP_REVIEWS".to_string()),
            reviews_timeout: Duration::from_secs(parse_or("REVIEWS_TIMEOUT_SECS", 30)?),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| ollama_client::DEFAULT_BASE_URL.to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string()),
            summary_timeout: Duration::from_secs(parse_or("SUMMARY_TIMEOUT_SECS", 300)?),
            model_checkpoint_path: env::var("MODEL_CHECKPOINT_PATH")
                .unwrap_or_else(|_| "models/finetuned_class_model".to_string())
                .into(),
            classification_threshold,
            max_token_length: parse_or("MAX_TOKEN_LENGTH", 128)?,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}

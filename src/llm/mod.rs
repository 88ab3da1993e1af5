//! LLM provider abstraction for recipe generation.
//!
//! This module provides a trait-based abstraction over the external
//! completion API, with a fake implementation for testing.

mod fake;
mod openai;

pub use fake::FakeProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A single chat completion request: one system instruction, one user prompt,
/// and fixed sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's text
/// response (first choice only).
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a completion request to the LLM and get a text response.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}

/// Create a provider from environment configuration.
///
/// - `PANTRYCHEF_LLM_PROVIDER`: "openai" (default) | "fake"
/// - `OPENAI_API_KEY`: API key, required for the openai provider
/// - `PANTRYCHEF_LLM_MODEL`: model name (default: "gpt-3.5-turbo")
/// - `PANTRYCHEF_LLM_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider =
        std::env::var("PANTRYCHEF_LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "openai" => {
            let api_key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;
            let model = std::env::var("PANTRYCHEF_LLM_MODEL")
                .unwrap_or_else(|_| openai::DEFAULT_MODEL.to_string());

            let mut provider = OpenAiProvider::new(api_key, model);
            if let Ok(base_url) = std::env::var("PANTRYCHEF_LLM_BASE_URL") {
                provider = provider.with_base_url(base_url);
            }
            Ok(Box::new(provider))
        }
        "fake" => Ok(Box::new(FakeProvider::default())),
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}

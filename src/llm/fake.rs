//! Fake LLM provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use super::{CompletionRequest, LlmError, LlmProvider};
use async_trait::async_trait;

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the user prompt contains a registered
/// substring (case-insensitive). If no match is found, returns the default
/// response when set, otherwise an error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Pairs of (prompt substring, canned response), checked in order.
    responses: Vec<(String, String)>,
    /// Default response if no pattern matches.
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: Vec::new(),
            default_response: Some(
                "Pantry Surprise\n1. Combine everything you have.\n2. Season to taste.\n3. Serve warm."
                    .to_string(),
            ),
        }
    }
}

impl FakeProvider {
    /// Create a FakeProvider with no registered responses. Every call fails
    /// until a response or default is configured.
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns `response` for prompts containing
    /// `prompt_contains`.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let prompt_lower = request.prompt.to_lowercase();

        for (pattern, response) in &self.responses {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                request.prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            system: "You are a helpful chef.".to_string(),
            prompt: prompt.to_string(),
            temperature: 0.8,
            max_tokens: 500,
        }
    }

    #[tokio::test]
    async fn test_matching_is_case_insensitive() {
        let provider = FakeProvider::with_response("MILK", "Milk Toast\n1. Toast the bread.");
        let result = provider
            .complete(&request("ingredients: milk, bread"))
            .await
            .unwrap();
        assert!(result.starts_with("Milk Toast"));
    }

    #[tokio::test]
    async fn test_no_match_without_default_fails() {
        let provider = FakeProvider::new();
        let result = provider.complete(&request("anything at all")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_default_response() {
        let provider = FakeProvider::new().with_default_response("Stone Soup\n1. Boil water.");
        let result = provider.complete(&request("no match here")).await.unwrap();
        assert_eq!(result, "Stone Soup\n1. Boil water.");
    }
}

//! Recipe generation: prompt construction plus the LLM call.

pub mod prompt;

pub use prompt::{render_recipe_prompt, RecipePrompt};

use crate::llm::{CompletionRequest, LlmError, LlmProvider};
use crate::models::PantryItem;
use chrono::NaiveDate;
use thiserror::Error;

/// System instruction sent with every recipe request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful chef who creates practical, delicious recipes.";

/// Sampling temperature for recipe generation.
pub const TEMPERATURE: f32 = 0.8;

/// Output length cap for generated recipes.
pub const MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Pantry is empty. Please add some ingredients first!")]
    EmptyPantry,

    #[error("Failed to generate recipe: {0}")]
    Generation(#[from] LlmError),
}

/// A generated recipe plus the pantry metadata the caller reports alongside it.
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub recipe: String,
    /// Names of expiring-soon items the prompt prioritized, in pantry order.
    pub expiring_items: Vec<String>,
    pub total_items: usize,
    /// Number of expiring items when any exist, otherwise the full pantry size.
    pub items_used: usize,
}

/// Generate a recipe from the current pantry contents.
///
/// Fails with [`RecipeError::EmptyPantry`] before touching the provider when
/// there are no items. Any provider failure is surfaced as
/// [`RecipeError::Generation`] with the cause attached.
pub async fn generate_recipe(
    items: &[PantryItem],
    today: NaiveDate,
    provider: &dyn LlmProvider,
) -> Result<GeneratedRecipe, RecipeError> {
    if items.is_empty() {
        return Err(RecipeError::EmptyPantry);
    }

    let prompt = render_recipe_prompt(items, today);

    let recipe = provider
        .complete(&CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: prompt.text,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        })
        .await?;

    let total_items = items.len();
    let items_used = if prompt.expiring.is_empty() {
        total_items
    } else {
        prompt.expiring.len()
    };

    Ok(GeneratedRecipe {
        recipe,
        expiring_items: prompt.expiring,
        total_items,
        items_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use chrono::Duration;

    fn item(id: i32, name: &str, expiry_date: Option<NaiveDate>) -> PantryItem {
        PantryItem {
            id,
            name: name.to_string(),
            expiry_date,
        }
    }

    #[tokio::test]
    async fn test_empty_pantry_skips_the_provider() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        // A provider with no responses errors on any call, so getting
        // EmptyPantry back proves it was never invoked.
        let provider = FakeProvider::new();

        let err = generate_recipe(&[], today, &provider).await.unwrap_err();
        assert!(matches!(err, RecipeError::EmptyPantry));
    }

    #[tokio::test]
    async fn test_items_used_counts_expiring_when_present() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let items = vec![
            item(1, "milk", Some(today + Duration::days(1))),
            item(2, "flour", Some(today + Duration::days(30))),
            item(3, "rice", None),
        ];
        let provider = FakeProvider::with_response("milk", "Milk Pancakes\n1. Mix.");

        let result = generate_recipe(&items, today, &provider).await.unwrap();

        assert_eq!(result.recipe, "Milk Pancakes\n1. Mix.");
        assert_eq!(result.expiring_items, vec!["milk"]);
        assert_eq!(result.total_items, 3);
        assert_eq!(result.items_used, 1);
    }

    #[tokio::test]
    async fn test_items_used_is_total_when_nothing_expires() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let items = vec![
            item(1, "flour", Some(today + Duration::days(30))),
            item(2, "rice", None),
        ];
        let provider = FakeProvider::default();

        let result = generate_recipe(&items, today, &provider).await.unwrap();

        assert!(result.expiring_items.is_empty());
        assert_eq!(result.total_items, 2);
        assert_eq!(result.items_used, 2);
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_generation_error() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let items = vec![item(1, "milk", None)];
        let provider = FakeProvider::new();

        let err = generate_recipe(&items, today, &provider).await.unwrap_err();
        assert!(matches!(err, RecipeError::Generation(_)));
        assert!(err.to_string().starts_with("Failed to generate recipe:"));
    }
}

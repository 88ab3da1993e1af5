//! Recipe prompt construction from pantry contents.

use crate::models::PantryItem;
use chrono::NaiveDate;

/// A rendered recipe prompt plus the expiring ingredient names it prioritizes.
#[derive(Debug, Clone)]
pub struct RecipePrompt {
    pub text: String,
    /// Names of items expiring within three days, in pantry order.
    pub expiring: Vec<String>,
}

/// Render the recipe-generation prompt for the given pantry.
///
/// Items expiring within three days of `today` are listed as high priority;
/// everything else is listed as also available. With nothing expiring, all
/// ingredients are listed with no priority distinction. Items without an
/// expiry date never count as expiring.
pub fn render_recipe_prompt(items: &[PantryItem], today: NaiveDate) -> RecipePrompt {
    let mut all_names: Vec<String> = Vec::with_capacity(items.len());
    let mut expiring: Vec<String> = Vec::new();

    for item in items {
        all_names.push(item.name.clone());
        if item.is_expiring_soon(today) {
            expiring.push(item.name.clone());
        }
    }

    let text = if expiring.is_empty() {
        format!(
            r#"You are a creative chef. Generate ONE delicious recipe.

AVAILABLE INGREDIENTS:
{ingredients}

Requirements:
- Recipe should be practical and take 30 minutes or less
- Include portions for 2 people
- Provide clear step-by-step instructions
- Include a recipe name as the first line"#,
            ingredients = all_names.join(", ")
        )
    } else {
        let remaining: Vec<&String> = all_names
            .iter()
            .filter(|name| !expiring.contains(name))
            .collect();
        let remaining = remaining
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"You are a creative chef. Generate ONE delicious recipe.

MUST USE (expiring soon - HIGH PRIORITY):
{expiring}

ALSO AVAILABLE:
{remaining}

Requirements:
- You MUST use at least 2 of the expiring ingredients
- Recipe should be practical and take 30 minutes or less
- Include portions for 2 people
- Provide clear step-by-step instructions
- Include a recipe name as the first line"#,
            expiring = expiring.join(", "),
            remaining = remaining
        )
    };

    RecipePrompt { text, expiring }
}

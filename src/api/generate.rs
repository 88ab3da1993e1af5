use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::PantryItem;
use crate::recipe::{self, RecipeError};
use crate::schema::pantry_items;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    /// Generated recipe text, recipe name on the first line
    pub recipe: String,
    /// Expiring ingredients the prompt prioritized
    pub expiring_items: Vec<String>,
    /// Total number of pantry items
    pub total_items: usize,
    /// Number of items used in the recipe
    pub items_used: usize,
}

/// Generate a recipe from the current pantry contents
///
/// Reads the whole pantry, builds a prompt that prioritizes ingredients
/// expiring within three days, and forwards it to the completion API.
#[utoipa::path(
    post,
    path = "/api/generate-recipe/",
    tag = "recipes",
    responses(
        (status = 200, description = "Generated recipe plus pantry metadata", body = RecipeResponse),
        (status = 400, description = "Pantry is empty", body = ErrorResponse),
        (status = 500, description = "Recipe generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(State(state): State<AppState>) -> impl IntoResponse {
    let items: Vec<PantryItem> = {
        let mut conn = get_conn!(state.pool);
        match pantry_items::table
            .select(PantryItem::as_select())
            .load(&mut conn)
        {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Failed to fetch pantry items: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to fetch pantry items".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    };

    let today = chrono::Utc::now().date_naive();

    match recipe::generate_recipe(&items, today, state.llm.as_ref()).await {
        Ok(generated) => (
            StatusCode::OK,
            Json(RecipeResponse {
                recipe: generated.recipe,
                expiring_items: generated.expiring_items,
                total_items: generated.total_items,
                items_used: generated.items_used,
            }),
        )
            .into_response(),
        Err(e @ RecipeError::EmptyPantry) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e @ RecipeError::Generation(_)) => {
            tracing::error!("Recipe generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(paths(generate_recipe), components(schemas(RecipeResponse)))]
pub struct ApiDoc;

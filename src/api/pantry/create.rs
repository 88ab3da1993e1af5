use super::list::PantryItemResponse;
use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::{NewPantryItem, PantryItem};
use crate::schema::pantry_items;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

/// Names longer than this are rejected.
const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePantryItemRequest {
    /// Name of the ingredient, 1-100 characters
    pub name: String,
    /// Optional expiry date, format: YYYY-MM-DD
    pub expiry_date: Option<NaiveDate>,
}

#[utoipa::path(
    post,
    path = "/api/pantry/",
    tag = "pantry",
    request_body = CreatePantryItemRequest,
    responses(
        (status = 201, description = "Pantry item created", body = PantryItemResponse),
        (status = 400, description = "Invalid item name", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn add_pantry_item(
    State(state): State<AppState>,
    Json(request): Json<CreatePantryItemRequest>,
) -> impl IntoResponse {
    let name = request.name.trim();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "name must not be empty".to_string(),
            }),
        )
            .into_response();
    }
    if name.chars().count() > MAX_NAME_LEN {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("name must be at most {} characters", MAX_NAME_LEN),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(state.pool);

    let inserted: PantryItem = match diesel::insert_into(pantry_items::table)
        .values(&NewPantryItem {
            name,
            expiry_date: request.expiry_date,
        })
        .returning(PantryItem::as_returning())
        .get_result(&mut conn)
    {
        Ok(item) => item,
        Err(e) => {
            tracing::error!("Failed to insert pantry item: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add pantry item".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::CREATED,
        Json(PantryItemResponse::from(inserted)),
    )
        .into_response()
}

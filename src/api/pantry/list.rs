use crate::api::ErrorResponse;
use crate::get_conn;
use crate::models::PantryItem;
use crate::schema::pantry_items;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PantryItemResponse {
    pub id: i32,
    pub name: String,
    pub expiry_date: Option<NaiveDate>,
}

impl From<PantryItem> for PantryItemResponse {
    fn from(item: PantryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            expiry_date: item.expiry_date,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/pantry/",
    tag = "pantry",
    responses(
        (status = 200, description = "All pantry items", body = [PantryItemResponse]),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_pantry_items(State(state): State<AppState>) -> impl IntoResponse {
    let mut conn = get_conn!(state.pool);

    let items: Vec<PantryItem> = match pantry_items::table
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
    };

    let items: Vec<PantryItemResponse> = items.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(items)).into_response()
}

use crate::api::ErrorResponse;
use crate::get_conn;
use crate::schema::pantry_items;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletePantryItemResponse {
    pub message: String,
    pub id: i32,
}

#[utoipa::path(
    delete,
    path = "/api/pantry/{id}",
    tag = "pantry",
    params(
        ("id" = i32, Path, description = "Pantry item ID")
    ),
    responses(
        (status = 200, description = "Pantry item deleted", body = DeletePantryItemResponse),
        (status = 404, description = "Pantry item not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn delete_pantry_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(state.pool);

    // Hard delete, per the pantry's lifecycle
    let deleted = match diesel::delete(pantry_items::table.filter(pantry_items::id.eq(id)))
        .execute(&mut conn)
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to delete pantry item: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete pantry item".to_string(),
                }),
            )
                .into_response();
        }
    };

    if deleted == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Item not found".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(DeletePantryItemResponse {
            message: "Item deleted successfully".to_string(),
            id,
        }),
    )
        .into_response()
}

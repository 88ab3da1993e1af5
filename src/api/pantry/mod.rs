pub mod create;
pub mod delete;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/pantry endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/pantry/",
            get(list::list_pantry_items).post(create::add_pantry_item),
        )
        .route(
            "/api/pantry/{id}",
            axum::routing::delete(delete::delete_pantry_item),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_pantry_items,
        create::add_pantry_item,
        delete::delete_pantry_item
    ),
    components(schemas(
        list::PantryItemResponse,
        create::CreatePantryItemRequest,
        delete::DeletePantryItemResponse,
    ))
)]
pub struct ApiDoc;

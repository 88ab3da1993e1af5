pub mod api;
pub mod db;
pub mod llm;
pub mod models;
pub mod pages;
pub mod recipe;
pub mod schema;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

pub struct AppContext {
    pub pool: db::DbPool,
    pub llm: Box<dyn llm::LlmProvider>,
}

/// Build the application router: landing page, REST API, Swagger UI, and
/// static assets.
pub fn app(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(api::health::health_check))
        .route("/api/generate-recipe/", post(api::generate::generate_recipe))
        .merge(api::pantry::router())
        .merge(swagger_ui)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

pub mod completion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod prompt;
pub mod rate_limit;
pub mod state;
pub mod suggestions;

use crate::handlers::{health_handler, index_handler, suggestions_handler};
use crate::models::ErrorResponse;
use crate::state::AppState;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

// Creating the router with routes
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/suggestions", post(suggestions_handler))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

async fn method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: format!("Method {} Not Allowed", method),
        }),
    )
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}

use crate::error::ApiError;
use crate::models::{SuggestionRequest, SuggestionResponse};
use crate::prompt::build_input;
use crate::rate_limit::client_key;
use crate::state::AppState;
use crate::suggestions::split_suggestions;
use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub async fn suggestions_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let key = client_key(&headers, addr);
    if !state.rate_limiter.check(&key) {
        info!(client = %key, "rate limited");
        return Err(ApiError::RateLimited);
    }

    let input = build_input(&payload);
    let suggestions = state
        .completion
        .feedback(input, payload.temperature)
        .await?;

    let items = split_suggestions(&suggestions);
    info!(client = %key, items = items.len(), "returned feedback");

    Ok(Json(SuggestionResponse { suggestions, items }))
}

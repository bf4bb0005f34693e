// HTTP request handlers
use crate::application::command_service::CommandService;
use crate::application::url_generator::UrlGenerator;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Every league key that produces standings URLs
pub async fn list_leagues(headers: HeaderMap) -> impl IntoResponse {
    let leagues = UrlGenerator::supported_leagues();
    match json_response(StatusCode::OK, &leagues, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Accept one inbound command envelope
pub async fn post_command(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(raw): Json<Value>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let outcome = match CommandService::parse(raw) {
        Ok(command) => {
            let name = command.name();
            let unique_id = command.unique_id().to_string();
            state
                .command_service
                .handle(command)
                .await
                .map(|_| json!({ "accepted": name, "uniqueID": unique_id }))
        }
        Err(e) => Err(e),
    };

    let (status, body) = match outcome {
        Ok(body) => (StatusCode::ACCEPTED, body),
        Err(e) => {
            tracing::warn!("Rejected command: {}", e);
            (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
        }
    };

    match json_response(status, &body, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Stream notifications for one dashboard instance
pub async fn stream_notifications(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let rx = state.notifier.subscribe();
    stream_from_receiver(rx, id, compress).await
}

/// Timer and in-flight request state for one dashboard instance
pub async fn instance_status(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let status = state.command_service.status(&id);
    match json_response(StatusCode::OK, &status, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

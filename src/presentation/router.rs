// Router - HTTP routes for the standings service
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    health_check, instance_status, list_leagues, post_command, stream_notifications,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/leagues", get(list_leagues))
        .route("/commands", post(post_command))
        .route("/instances/:id/notifications", get(stream_notifications))
        .route("/instances/:id/status", get(instance_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

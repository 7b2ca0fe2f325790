// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{all_data, generate_data, health_check, latest_data};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    // The browser dashboard is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health_check))
        .route("/generate-data", post(generate_data))
        .route("/latest-data", get(latest_data))
        .route("/all-data", get(all_data))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

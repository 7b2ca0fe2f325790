// HTTP request handlers
use crate::application::sensor_service::ServiceError;
use crate::domain::reading::Reading;
use crate::infrastructure::http_response::{error_response, json_response};
use crate::presentation::app_state::AppState;
use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;
use std::sync::Arc;

pub const GENERATED_MESSAGE: &str = "Sensor data generated";
pub const GENERATE_FAILED: &str = "Failed to generate data";
pub const FETCH_FAILED: &str = "Failed to fetch data";
pub const NOT_FOUND: &str = "No data found";

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub message: &'static str,
    pub data: Reading,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Generate, store and evaluate a new reading
pub async fn generate_data(State(state): State<Arc<AppState>>) -> Response {
    match state.sensor_service.generate().await {
        Ok(generated) => json_response(
            StatusCode::CREATED,
            GenerateResponse {
                message: GENERATED_MESSAGE,
                data: generated.reading,
                actions: generated.actions,
            },
        ),
        Err(e) => {
            tracing::error!("Error generating reading: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERATE_FAILED)
        }
    }
}

/// Most recent reading
pub async fn latest_data(State(state): State<Arc<AppState>>) -> Response {
    match state.sensor_service.latest().await {
        Ok(reading) => json_response(StatusCode::OK, DataResponse { data: reading }),
        Err(ServiceError::NotFound) => error_response(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(e) => {
            tracing::error!("Error fetching latest reading: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
        }
    }
}

/// Every reading, newest first
pub async fn all_data(State(state): State<Arc<AppState>>) -> Response {
    match state.sensor_service.all().await {
        Ok(readings) => json_response(StatusCode::OK, DataResponse { data: readings }),
        Err(e) => {
            tracing::error!("Error fetching readings: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sensor_service::SensorService;
    use crate::infrastructure::memory_repository::MemoryRepository;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            sensor_service: SensorService::new(Arc::new(MemoryRepository::new())),
        })
    }

    #[tokio::test]
    async fn test_latest_empty_is_not_found() {
        let resp = latest_data(State(test_state())).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_then_latest() {
        let state = test_state();
        let resp = generate_data(State(state.clone())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = latest_data(State(state.clone())).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = all_data(State(state)).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

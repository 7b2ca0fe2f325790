// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use greenhouse_telemetry::application::reading_repository::ReadingRepository;
use greenhouse_telemetry::application::sensor_service::SensorService;
use greenhouse_telemetry::infrastructure::config::{StorageBackend, StorageSettings, load_settings};
use greenhouse_telemetry::infrastructure::memory_repository::MemoryRepository;
use greenhouse_telemetry::infrastructure::mongo_repository::MongoRepository;
use greenhouse_telemetry::init_tracing;
use greenhouse_telemetry::presentation::app_state::AppState;
use greenhouse_telemetry::presentation::router::build_router;

async fn open_repository(storage: &StorageSettings) -> anyhow::Result<Arc<dyn ReadingRepository>> {
    Ok(match storage.backend {
        StorageBackend::Memory => {
            tracing::info!("using in-memory reading store");
            Arc::new(MemoryRepository::new())
        }
        StorageBackend::Mongo => Arc::new(
            MongoRepository::connect(&storage.uri, &storage.database, &storage.collection).await?,
        ),
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutdown requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_settings()?;
    init_tracing(&settings.log.filter);

    // Open the store (infrastructure layer)
    let repository = open_repository(&settings.storage).await?;

    // Create service (application layer)
    let sensor_service = SensorService::new(repository);

    let state = Arc::new(AppState {
        sensor_service: sensor_service.clone(),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    let addr = settings.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting greenhouse-telemetry service on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sensor_service.shutdown().await;
    Ok(())
}

// Sensor service - Generate, persist and evaluate readings
use crate::application::reading_repository::{ReadingRepository, StoreError};
use crate::domain::generator;
use crate::domain::reading::Reading;
use crate::domain::rules;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no readings stored yet")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct GeneratedReading {
    pub reading: Reading,
    pub actions: Vec<String>,
}

#[derive(Clone)]
pub struct SensorService {
    repository: Arc<dyn ReadingRepository>,
}

impl SensorService {
    pub fn new(repository: Arc<dyn ReadingRepository>) -> Self {
        Self { repository }
    }

    pub async fn generate(&self) -> Result<GeneratedReading, ServiceError> {
        let sample = generator::generate();
        let reading = self.repository.insert(sample).await?;
        // Evaluated on the value just written; no re-read.
        let actions = rules::evaluate(&reading.sample);

        tracing::info!(id = %reading.id, ?actions, "reading generated");
        Ok(GeneratedReading { reading, actions })
    }

    pub async fn latest(&self) -> Result<Reading, ServiceError> {
        self.repository.latest().await?.ok_or(ServiceError::NotFound)
    }

    pub async fn all(&self) -> Result<Vec<Reading>, ServiceError> {
        Ok(self.repository.all().await?)
    }

    pub async fn shutdown(&self) {
        self.repository.close().await;
    }
}

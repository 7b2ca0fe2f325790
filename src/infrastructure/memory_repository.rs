// In-process reading store
use crate::application::reading_repository::{ReadingRepository, StoreResult};
use crate::domain::reading::{Reading, SensorSample};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    readings: RwLock<Vec<Reading>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn push(&self, reading: Reading) {
        self.readings.write().await.push(reading);
    }
}

#[async_trait]
impl ReadingRepository for MemoryRepository {
    async fn insert(&self, sample: SensorSample) -> StoreResult<Reading> {
        let reading = Reading::stamp(sample);
        self.readings.write().await.push(reading.clone());
        tracing::debug!(id = %reading.id, "reading stored in memory");
        Ok(reading)
    }

    async fn latest(&self) -> StoreResult<Option<Reading>> {
        let readings = self.readings.read().await;
        // Ties go to the most recently inserted reading.
        Ok(readings
            .iter()
            .rev()
            .reduce(|best, r| if r.created_at > best.created_at { r } else { best })
            .cloned())
    }

    async fn all(&self) -> StoreResult<Vec<Reading>> {
        let mut readings: Vec<Reading> = self.readings.read().await.iter().rev().cloned().collect();
        readings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(readings)
    }
}

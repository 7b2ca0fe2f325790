// Repository trait for reading persistence
use crate::domain::reading::{Reading, SensorSample};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("malformed reading record: {0}")]
    Malformed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Append-only reading store. Readings are never updated or deleted.
#[async_trait]
pub trait ReadingRepository: Send + Sync {
    /// Persist a sample, returning it with its assigned id and creation time
    async fn insert(&self, sample: SensorSample) -> StoreResult<Reading>;

    /// The reading with the greatest creation time, if any
    async fn latest(&self) -> StoreResult<Option<Reading>>;

    /// Every reading, newest first
    async fn all(&self) -> StoreResult<Vec<Reading>>;

    /// Release the underlying connection
    async fn close(&self) {}
}

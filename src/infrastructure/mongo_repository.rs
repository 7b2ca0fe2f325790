// MongoDB repository implementation
use crate::application::reading_repository::{ReadingRepository, StoreError, StoreResult};
use crate::domain::reading::{Reading, SensorSample};
use crate::infrastructure::document_mapper::{document_to_reading, reading_to_document};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};

#[derive(Debug, Clone)]
pub struct MongoRepository {
    client: Client,
    collection: Collection<Document>,
}

fn unavailable(e: mongodb::error::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

impl MongoRepository {
    /// Connect and verify the server answers before accepting requests.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await.map_err(unavailable)?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await.map_err(unavailable)?;

        tracing::info!(database, collection, "connected to MongoDB");
        Ok(Self {
            collection: db.collection::<Document>(collection),
            client,
        })
    }

    fn newest_first() -> Document {
        doc! { "createdAt": -1 }
    }
}

#[async_trait]
impl ReadingRepository for MongoRepository {
    async fn insert(&self, sample: SensorSample) -> StoreResult<Reading> {
        let reading = Reading::stamp(sample);
        self.collection
            .insert_one(reading_to_document(&reading))
            .await
            .map_err(unavailable)?;
        tracing::debug!(id = %reading.id, "reading stored in MongoDB");
        Ok(reading)
    }

    async fn latest(&self) -> StoreResult<Option<Reading>> {
        let document = self
            .collection
            .find_one(doc! {})
            .sort(Self::newest_first())
            .await
            .map_err(unavailable)?;

        document.as_ref().map(document_to_reading).transpose()
    }

    async fn all(&self) -> StoreResult<Vec<Reading>> {
        let documents: Vec<Document> = self
            .collection
            .find(doc! {})
            .sort(Self::newest_first())
            .await
            .map_err(unavailable)?
            .try_collect()
            .await
            .map_err(unavailable)?;

        documents.iter().map(document_to_reading).collect()
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}

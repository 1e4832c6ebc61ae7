use super::{StatusCheckStore, StorageError};
use crate::config::DatabaseSettings;
use crate::models::status_check::{StatusCheck, StatusCheckDocument};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

pub const STATUS_CHECKS_COLLECTION: &str = "status_checks";

#[derive(Clone)]
pub struct MongoStatusCheckStore {
    client: Client,
    collection: Collection<StatusCheckDocument>,
}

impl MongoStatusCheckStore {
    /// Connects to MongoDB and verifies the server answers a `ping`.
    ///
    /// # Errors
    /// Returns an error if the URI cannot be parsed or no server can be
    /// selected within the driver's server selection timeout.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StorageError> {
        let client = Client::with_uri_str(&settings.url).await?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        let collection = client
            .database(&settings.name)
            .collection(STATUS_CHECKS_COLLECTION);

        Ok(Self { client, collection })
    }

    /// Closes the underlying client once the server has stopped.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl StatusCheckStore for MongoStatusCheckStore {
    async fn insert(&self, status_check: &StatusCheck) -> Result<(), StorageError> {
        self.collection
            .insert_one(StatusCheckDocument::from(status_check))
            .await?;
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>, StorageError> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let documents: Vec<StatusCheckDocument> = cursor.try_collect().await?;

        documents.into_iter().map(StatusCheck::try_from).collect()
    }
}

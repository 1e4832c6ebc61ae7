use crate::models::status_check::StatusCheck;
use async_trait::async_trait;
use thiserror::Error;

/// # MongoDB Store
///
/// Production [`StatusCheckStore`] backed by the `status_checks` collection.
pub mod mongo;

#[cfg(test)]
pub mod memory;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("stored timestamp {0}ms is out of range")]
    InvalidTimestamp(i64),
}

/// Durable storage for status checks.
///
/// Implementations are shared by every actix worker and must be safe for
/// concurrent use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCheckStore: Send + Sync {
    /// Persists one record.
    async fn insert(&self, status_check: &StatusCheck) -> Result<(), StorageError>;

    /// Returns at most `limit` records in the store's natural order.
    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>, StorageError>;
}

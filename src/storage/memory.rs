use super::{StatusCheckStore, StorageError};
use crate::models::status_check::StatusCheck;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Insertion-ordered store used by route tests in place of MongoDB.
#[derive(Default)]
pub struct InMemoryStatusCheckStore {
    records: RwLock<Vec<StatusCheck>>,
}

impl InMemoryStatusCheckStore {
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl StatusCheckStore for InMemoryStatusCheckStore {
    async fn insert(&self, status_check: &StatusCheck) -> Result<(), StorageError> {
        self.records.write().await.push(status_check.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>, StorageError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.records.read().await.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_respects_insertion_order_and_limit() {
        let store = InMemoryStatusCheckStore::default();
        for name in ["a", "b", "c"] {
            store.insert(&StatusCheck::new(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list(2)
            .await
            .unwrap()
            .into_iter()
            .map(|status_check| status_check.client_name)
            .collect();

        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(store.len().await, 3);
    }
}

use crate::shared::infrastructure::document_store::{DocumentStore, StoreError};
use async_trait::async_trait;
use serde_json::Value as Json;

/// Installed when the startup connection fails: the process keeps serving,
/// every store call fails with `Unavailable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisconnectedStore;

#[async_trait]
impl DocumentStore for DisconnectedStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn ensure_collection(&self, _collection: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_all(&self, _collection: &str) -> Result<Vec<Json>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn find_one(&self, _collection: &str, _id: &str) -> Result<Option<Json>, StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn insert(&self, _collection: &str, _id: &str, _document: Json) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn replace(&self, _collection: &str, _id: &str, _document: Json) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

use crate::shared::infrastructure::document_store::{DocumentStore, StoreError};
use async_trait::async_trait;
use serde_json::Value as Json;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Json>>>,
    is_offline: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Document store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_online()
    }

    async fn ensure_collection(&self, collection: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default();
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Json>, StoreError> {
        self.ensure_online()?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|documents| documents.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Json>, StoreError> {
        self.ensure_online()?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn insert(&self, collection: &str, id: &str, document: Json) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        let documents = guard.entry(collection.to_string()).or_default();
        if documents.contains_key(id) {
            return Err(StoreError::Conflict {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        documents.insert(id.to_string(), document);
        Ok(())
    }

    async fn replace(&self, collection: &str, id: &str, document: Json) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        match guard
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
        {
            Some(slot) => {
                *slot = document;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        match guard
            .get_mut(collection)
            .and_then(|documents| documents.remove(id))
        {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }
}

// Typed access to the notes collection of the document store.
//
// Documents that cannot be decoded as notes are skipped with a warning, so
// one malformed record does not hide the rest of the collection.

use crate::modules::notes::core::note::Note;
use crate::shared::infrastructure::document_store::{DocumentStore, StoreError};
use serde_json::Value as Json;
use std::sync::Arc;
use tracing::warn;

pub const DEFAULT_COLLECTION: &str = "notes";

#[derive(Clone)]
pub struct NoteRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl NoteRepository {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Note>, StoreError> {
        let documents = self.store.find_all(&self.collection).await?;
        Ok(documents
            .into_iter()
            .filter_map(|document| match serde_json::from_value::<Note>(document) {
                Ok(note) => Some(note),
                Err(error) => {
                    warn!(collection = %self.collection, %error, "skipping malformed note document");
                    None
                }
            })
            .collect())
    }

    pub async fn find(&self, id: &str) -> Result<Option<Note>, StoreError> {
        match self.store.find_one(&self.collection, id).await? {
            Some(document) => serde_json::from_value(document)
                .map(Some)
                .map_err(|e| StoreError::Backend(e.to_string())),
            None => Ok(None),
        }
    }

    pub async fn insert(&self, note: &Note) -> Result<(), StoreError> {
        self.store
            .insert(&self.collection, &note.id, encode(note)?)
            .await
    }

    pub async fn replace(&self, note: &Note) -> Result<(), StoreError> {
        self.store
            .replace(&self.collection, &note.id, encode(note)?)
            .await
    }

    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.store.delete(&self.collection, id).await
    }
}

fn encode(note: &Note) -> Result<Json, StoreError> {
    serde_json::to_value(note).map_err(|e| StoreError::Backend(e.to_string()))
}

#[cfg(test)]
mod note_repository_tests {
    use super::*;
    use crate::shared::infrastructure::document_store::in_memory::InMemoryStore;
    use crate::tests::fixtures::notes::NoteBuilder;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_round_trip_a_note_through_the_store(store: Arc<InMemoryStore>) {
        let repository = NoteRepository::new(store, DEFAULT_COLLECTION);
        let note = NoteBuilder::new().build();
        repository.insert(&note).await.unwrap();
        assert_eq!(repository.find(&note.id).await.unwrap(), Some(note.clone()));
        assert_eq!(repository.list_all().await.unwrap(), vec![note]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_malformed_documents(store: Arc<InMemoryStore>) {
        store
            .insert("notes", "broken", json!({"_id": "broken", "title": 42}))
            .await
            .unwrap();
        let repository = NoteRepository::new(store, "notes");
        let note = NoteBuilder::new().id("ok").build();
        repository.insert(&note).await.unwrap();
        assert_eq!(repository.list_all().await.unwrap(), vec![note]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_and_remove_notes(store: Arc<InMemoryStore>) {
        let repository = NoteRepository::new(store, "notes");
        let note = NoteBuilder::new().build();
        repository.insert(&note).await.unwrap();
        let edited = note.edited("New".into(), "Body".into(), note.created_at);
        repository.replace(&edited).await.unwrap();
        assert_eq!(repository.find(&note.id).await.unwrap(), Some(edited));
        repository.remove(&note.id).await.unwrap();
        assert_eq!(repository.find(&note.id).await.unwrap(), None);
    }
}

use crate::modules::notes::adapters::outbound::note_repository::NoteRepository;
use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub notes: NoteRepository,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            notes: NoteRepository::new(store, collection),
        }
    }
}

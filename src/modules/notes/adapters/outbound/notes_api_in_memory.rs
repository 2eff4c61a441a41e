use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::modules::notes::adapters::outbound::notes_api::{NotesApi, NotesApiError};
use crate::modules::notes::core::note::Note;

#[derive(Default)]
pub struct InMemoryNotesApi {
    notes: Mutex<Vec<Note>>,
    is_offline: AtomicBool,
}

impl InMemoryNotesApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Vec<Note> {
        self.notes.lock().await.clone()
    }

    fn ensure_online(&self) -> Result<(), NotesApiError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(NotesApiError::Transport("backend offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NotesApi for InMemoryNotesApi {
    async fn list(&self) -> Result<Vec<Note>, NotesApiError> {
        self.ensure_online()?;
        Ok(self.snapshot().await)
    }

    async fn create(&self, note: &Note) -> Result<Note, NotesApiError> {
        self.ensure_online()?;
        let mut notes = self.notes.lock().await;
        if notes.iter().any(|n| n.id == note.id) {
            return Err(NotesApiError::Status { status: 409 });
        }
        notes.insert(0, note.clone());
        Ok(note.clone())
    }

    async fn update(&self, note: &Note) -> Result<Note, NotesApiError> {
        self.ensure_online()?;
        let mut notes = self.notes.lock().await;
        let slot = notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or(NotesApiError::Status { status: 404 })?;
        *slot = note.clone();
        Ok(note.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), NotesApiError> {
        self.ensure_online()?;
        let mut notes = self.notes.lock().await;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(NotesApiError::Status { status: 404 });
        }
        Ok(())
    }
}

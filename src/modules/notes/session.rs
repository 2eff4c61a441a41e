// Client session: the controller plus a connection to the notes backend.
//
// Local state changes first. Accepted mutations are then written through to
// the backend; the stored copy the backend returns replaces the local one,
// since the backend stamps the timestamps. A failed write raises the banner
// and keeps the local change.

use chrono::Utc;
use tracing::{info, warn};

use crate::modules::notes::adapters::outbound::notes_api::NotesApi;
use crate::modules::notes::controller::{
    CREATE_FAILED, DELETE_FAILED, DeleteOutcome, FETCH_FAILED, NotesController, UPDATE_FAILED,
};
use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::placeholder::placeholder_notes;
use crate::modules::notes::core::validation::DecideError;

pub struct NotesSession<A: NotesApi> {
    api: A,
    controller: NotesController,
}

impl<A: NotesApi> NotesSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            controller: NotesController::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn controller(&self) -> &NotesController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NotesController {
        &mut self.controller
    }

    /// Initial fetch. Falls back to the placeholder notes when the backend
    /// cannot be reached.
    pub async fn load(&mut self) {
        self.controller.set_loading(true);
        match self.api.list().await {
            Ok(notes) => {
                info!(count = notes.len(), "notes loaded");
                self.controller.replace_all(notes);
                self.controller.clear_error();
            }
            Err(error) => {
                warn!(%error, "fetching notes failed, showing placeholders");
                self.controller.replace_all(placeholder_notes(Utc::now()));
                self.controller.report_error(FETCH_FAILED);
            }
        }
        self.controller.set_loading(false);
    }

    pub async fn create(&mut self, title: &str, body: &str) -> Result<Note, DecideError> {
        let note = self.controller.create(title, body)?;
        match self.api.create(&note).await {
            Ok(stored) => Ok(self.adopt(stored)),
            Err(error) => {
                warn!(note_id = %note.id, %error, "create not stored");
                self.controller.report_error(CREATE_FAILED);
                Ok(note)
            }
        }
    }

    pub async fn update(&mut self, id: &str, title: &str, body: &str) -> Result<Note, DecideError> {
        let note = self.controller.update(id, title, body)?;
        match self.api.update(&note).await {
            Ok(stored) => Ok(self.adopt(stored)),
            Err(error) => {
                warn!(note_id = %note.id, %error, "update not stored");
                self.controller.report_error(UPDATE_FAILED);
                Ok(note)
            }
        }
    }

    /// Two-phase: only the confirming call reaches the backend.
    pub async fn delete(&mut self, id: &str) -> DeleteOutcome {
        let outcome = self.controller.delete(id);
        if let DeleteOutcome::Removed(note) = &outcome {
            if let Err(error) = self.api.delete(&note.id).await {
                warn!(note_id = %note.id, %error, "delete not stored");
                self.controller.report_error(DELETE_FAILED);
            }
        }
        outcome
    }

    fn adopt(&mut self, stored: Note) -> Note {
        self.controller.replace_note(stored.clone());
        stored
    }
}

// Client state controller for the note collection.
//
// Owns the collection, the delete confirmation, the edit draft and the
// error banner. Every intent goes through a pure decider and is folded into
// the state with `evolve`; nothing here performs input or output.

use chrono::Utc;
use tracing::{debug, warn};

use crate::modules::notes::core::events::NoteEvent;
use crate::modules::notes::core::evolve::evolve;
use crate::modules::notes::core::note::{Note, new_note_id};
use crate::modules::notes::core::sort_order::SortOrder;
use crate::modules::notes::core::state::{DeleteConfirmation, NotebookState};
use crate::modules::notes::core::validation::DecideError;
use crate::modules::notes::use_cases::create_note::command::CreateNote;
use crate::modules::notes::use_cases::create_note::decide::decide_create;
use crate::modules::notes::use_cases::delete_note::decide::decide_delete;
use crate::modules::notes::use_cases::list_notes::query::list_notes;
use crate::modules::notes::use_cases::update_note::command::UpdateNote;
use crate::modules::notes::use_cases::update_note::decide::decide_update;

pub const FETCH_FAILED: &str = "Failed to fetch notes. Please try again later.";
pub const CREATE_FAILED: &str = "Failed to create note. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update note. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete note. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// First request: confirmation is now pending for this id.
    Armed,
    Removed(Note),
    /// Confirmed, but the note was no longer in the collection.
    Missing,
}

#[derive(Debug, Default)]
pub struct NotesController {
    state: NotebookState,
    draft: Option<EditDraft>,
    error: Option<String>,
    loading: bool,
}

impl NotesController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let mut controller = Self::new();
        controller.replace_all(notes);
        controller
    }

    pub fn list(&self, filter: &str, sort: SortOrder) -> Vec<Note> {
        list_notes(&self.state.notes, filter, sort)
    }

    pub fn notes(&self) -> &[Note] {
        &self.state.notes
    }

    pub fn len(&self) -> usize {
        self.state.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.notes.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Note> {
        self.state.find(id)
    }

    /// Rejections leave the collection untouched and do not raise the banner.
    pub fn create(&mut self, title: &str, body: &str) -> Result<Note, DecideError> {
        let command = CreateNote {
            note_id: new_note_id(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
        };
        let note = decide_create(self.state.find(&command.note_id), command)?;
        debug!(note_id = %note.id, "note created");
        self.apply(NoteEvent::NoteCreated(note.clone()));
        self.error = None;
        Ok(note)
    }

    pub fn update(&mut self, id: &str, title: &str, body: &str) -> Result<Note, DecideError> {
        let command = UpdateNote {
            note_id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            updated_at: Utc::now(),
        };
        let note = match decide_update(self.state.find(id), command) {
            Ok(note) => note,
            Err(DecideError::NotFound) => {
                warn!(note_id = %id, "update requested for unknown note");
                self.error = Some(UPDATE_FAILED.to_string());
                return Err(DecideError::NotFound);
            }
            Err(reason) => return Err(reason),
        };
        debug!(note_id = %note.id, "note updated");
        self.apply(NoteEvent::NoteUpdated(note.clone()));
        if self.draft.as_ref().is_some_and(|draft| draft.id == id) {
            self.draft = None;
        }
        self.error = None;
        Ok(note)
    }

    pub fn delete(&mut self, id: &str) -> DeleteOutcome {
        match decide_delete(&self.state.pending_delete, id) {
            NoteEvent::NoteDeleted { id } => {
                let removed = self.state.find(&id).cloned();
                self.apply(NoteEvent::NoteDeleted { id: id.clone() });
                if self.draft.as_ref().is_some_and(|draft| draft.id == id) {
                    self.draft = None;
                }
                match removed {
                    Some(note) => {
                        debug!(note_id = %note.id, "note deleted");
                        self.error = None;
                        DeleteOutcome::Removed(note)
                    }
                    None => DeleteOutcome::Missing,
                }
            }
            event => {
                self.apply(event);
                DeleteOutcome::Armed
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.apply(NoteEvent::DeleteCancelled);
    }

    pub fn pending_delete(&self) -> &DeleteConfirmation {
        &self.state.pending_delete
    }

    pub fn begin_edit(&mut self, id: &str) -> Option<&EditDraft> {
        let note = self.state.find(id)?;
        self.draft = Some(EditDraft {
            id: note.id.clone(),
            title: note.title.clone(),
            body: note.body.clone(),
        });
        self.draft.as_ref()
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Swaps in the stored copy of a note, keeping its position. Unknown ids
    /// are ignored.
    pub fn replace_note(&mut self, note: Note) {
        if self.state.find(&note.id).is_some() {
            self.apply(NoteEvent::NoteUpdated(note));
        }
    }

    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.apply(NoteEvent::NotesLoaded(notes));
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_error(&mut self) {
        self.clear_error();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn apply(&mut self, event: NoteEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = evolve(state, event);
    }
}

use crate::modules::notes::core::events::NoteEvent;
use crate::modules::notes::core::state::{DeleteConfirmation, NotebookState};
use std::collections::HashSet;

pub fn evolve(state: NotebookState, event: NoteEvent) -> NotebookState {
    match event {
        NoteEvent::NotesLoaded(notes) => {
            // First occurrence wins so ids stay unique.
            let mut seen = HashSet::new();
            let notes = notes
                .into_iter()
                .filter(|note| seen.insert(note.id.clone()))
                .collect();
            NotebookState {
                notes,
                pending_delete: DeleteConfirmation::Idle,
            }
        }
        NoteEvent::NoteCreated(note) => {
            let mut notes = state.notes;
            notes.insert(0, note);
            NotebookState { notes, ..state }
        }
        NoteEvent::NoteUpdated(updated) => {
            let notes = state
                .notes
                .into_iter()
                .map(|note| {
                    if note.id == updated.id {
                        updated.clone()
                    } else {
                        note
                    }
                })
                .collect();
            NotebookState { notes, ..state }
        }
        NoteEvent::DeleteRequested { id } => NotebookState {
            pending_delete: DeleteConfirmation::Pending(id),
            ..state
        },
        NoteEvent::DeleteCancelled => NotebookState {
            pending_delete: DeleteConfirmation::Idle,
            ..state
        },
        NoteEvent::NoteDeleted { id } => {
            let mut notes = state.notes;
            notes.retain(|note| note.id != id);
            NotebookState {
                notes,
                pending_delete: DeleteConfirmation::Idle,
            }
        }
    }
}

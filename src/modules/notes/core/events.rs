use crate::modules::notes::core::note::Note;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    NotesLoaded(Vec<Note>),
    NoteCreated(Note),
    NoteUpdated(Note),
    DeleteRequested { id: String },
    DeleteCancelled,
    NoteDeleted { id: String },
}

use crate::modules::notes::core::note::Note;

/// Two-phase delete: a first request arms `Pending`, a second request on the
/// same id confirms it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    Pending(String),
}

impl DeleteConfirmation {
    pub fn is_pending_for(&self, id: &str) -> bool {
        matches!(self, DeleteConfirmation::Pending(pending) if pending == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotebookState {
    pub notes: Vec<Note>,
    pub pending_delete: DeleteConfirmation,
}

impl NotebookState {
    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }
}

// Port the client session uses to reach the notes backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::notes::core::note::Note;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotesApiError {
    #[error("notes backend unreachable: {0}")]
    Transport(String),

    #[error("notes backend answered with status {status}")]
    Status { status: u16 },
}

#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Note>, NotesApiError>;
    /// Stores the note under its own id.
    async fn create(&self, note: &Note) -> Result<Note, NotesApiError>;
    async fn update(&self, note: &Note) -> Result<Note, NotesApiError>;
    async fn delete(&self, id: &str) -> Result<(), NotesApiError>;
}

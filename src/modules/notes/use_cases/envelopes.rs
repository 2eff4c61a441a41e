// Request and response bodies of the notes REST surface, shared by the
// server handlers and the HTTP client adapter.

use serde::{Deserialize, Serialize};

use crate::modules::notes::core::note::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesEnvelope {
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEnvelope {
    pub note: Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: String,
    pub body: String,
}

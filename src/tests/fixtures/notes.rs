// Shared test builders for notes and note commands.
//
// Defaults are fixed values so assertions can compare against literals.

use crate::modules::notes::core::note::Note;
use crate::modules::notes::use_cases::create_note::command::CreateNote;
use chrono::{DateTime, Utc};

pub const FIXED_CREATED_AT_MS: i64 = 1_700_000_000_000;

pub fn at_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).expect("timestamp in range")
}

pub struct NoteBuilder {
    inner: Note,
}

impl Default for NoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NoteBuilder {
    pub fn new() -> Self {
        Self {
            inner: Note {
                id: "note-fixed-0001".to_string(),
                title: "Groceries".to_string(),
                body: "Milk, eggs and bread".to_string(),
                created_at: at_millis(FIXED_CREATED_AT_MS),
                updated_at: None,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn body(mut self, v: impl Into<String>) -> Self {
        self.inner.body = v.into();
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn updated_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.updated_at = Some(v);
        self
    }

    pub fn build(self) -> Note {
        self.inner
    }
}

pub struct CreateNoteBuilder {
    inner: CreateNote,
}

impl Default for CreateNoteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateNoteBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateNote {
                note_id: "note-fixed-0001".to_string(),
                title: "Groceries".to_string(),
                body: "Milk, eggs and bread".to_string(),
                created_at: at_millis(FIXED_CREATED_AT_MS),
            },
        }
    }

    pub fn note_id(mut self, v: impl Into<String>) -> Self {
        self.inner.note_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn body(mut self, v: impl Into<String>) -> Self {
        self.inner.body = v.into();
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> CreateNote {
        self.inner
    }
}

#[cfg(test)]
mod note_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = NoteBuilder::default().build();
        assert_eq!(built.id, "note-fixed-0001");
        assert_eq!(built.created_at.timestamp_millis(), FIXED_CREATED_AT_MS);
        assert_eq!(built.updated_at, None);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let note = NoteBuilder::new()
            .id("n-2")
            .title("t")
            .body("b")
            .created_at(at_millis(1))
            .updated_at(at_millis(2))
            .build();
        assert_eq!(note.id, "n-2");
        assert_eq!(note.title, "t");
        assert_eq!(note.body, "b");
        assert_eq!(note.created_at, at_millis(1));
        assert_eq!(note.updated_at, Some(at_millis(2)));

        let command = CreateNoteBuilder::default()
            .note_id("n-3")
            .created_at(at_millis(5))
            .build();
        assert_eq!(command.note_id, "n-3");
        assert_eq!(command.created_at, at_millis(5));
    }
}

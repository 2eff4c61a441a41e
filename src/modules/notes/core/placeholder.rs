use chrono::{DateTime, Duration, Utc};

use crate::modules::notes::core::note::Note;

/// Dataset shown when the initial fetch fails.
pub fn placeholder_notes(now: DateTime<Utc>) -> Vec<Note> {
    vec![
        Note {
            id: "1".to_string(),
            title: "Welcome".to_string(),
            body: "Welcome to your notes app!".to_string(),
            created_at: now,
            updated_at: None,
        },
        Note {
            id: "2".to_string(),
            title: "Getting Started".to_string(),
            body: "Create your first note by filling out the form below.".to_string(),
            created_at: now - Duration::days(1),
            updated_at: None,
        },
    ]
}

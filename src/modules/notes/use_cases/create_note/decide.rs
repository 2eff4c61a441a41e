// Pure decision function for note creation.
//
// - Title and body must be non-empty after trimming.
// - The identifier must not already be taken.
// - Returns the note to record; never performs input or output.

use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::validation::{DecideError, ensure_filled};
use crate::modules::notes::use_cases::create_note::command::CreateNote;

pub fn decide_create(existing: Option<&Note>, command: CreateNote) -> Result<Note, DecideError> {
    ensure_filled(&command.title, &command.body)?;
    if existing.is_some() {
        return Err(DecideError::AlreadyExists);
    }
    Ok(Note {
        id: command.note_id,
        title: command.title,
        body: command.body,
        created_at: command.created_at,
        updated_at: None,
    })
}

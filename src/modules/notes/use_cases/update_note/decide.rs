// Pure decision function for editing a note.
//
// - Blank content is rejected before the target is looked at, so a blank
//   submission never changes anything.
// - The creation time is preserved and the update time stamped.

use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::validation::{DecideError, ensure_filled};
use crate::modules::notes::use_cases::update_note::command::UpdateNote;

pub fn decide_update(existing: Option<&Note>, command: UpdateNote) -> Result<Note, DecideError> {
    ensure_filled(&command.title, &command.body)?;
    let note = existing.ok_or(DecideError::NotFound)?;
    Ok(note.edited(command.title, command.body, command.updated_at))
}

use crate::modules::notes::adapters::outbound::note_repository::NoteRepository;
use crate::modules::notes::core::note::Note;
use crate::modules::notes::use_cases::application_error::ApplicationError;
use crate::modules::notes::use_cases::update_note::command::UpdateNote;
use crate::modules::notes::use_cases::update_note::decide::decide_update;
use tracing::info;

pub async fn handle(
    repository: &NoteRepository,
    command: UpdateNote,
) -> Result<Note, ApplicationError> {
    let existing = repository.find(&command.note_id).await?;
    let note = decide_update(existing.as_ref(), command)?;
    repository.replace(&note).await?;
    info!(note_id = %note.id, "note updated");
    Ok(note)
}

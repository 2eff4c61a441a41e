use crate::modules::notes::adapters::outbound::note_repository::NoteRepository;
use crate::modules::notes::core::note::Note;
use crate::modules::notes::use_cases::application_error::ApplicationError;
use crate::modules::notes::use_cases::create_note::command::CreateNote;
use crate::modules::notes::use_cases::create_note::decide::decide_create;
use tracing::info;

pub async fn handle(
    repository: &NoteRepository,
    command: CreateNote,
) -> Result<Note, ApplicationError> {
    let existing = repository.find(&command.note_id).await?;
    let note = decide_create(existing.as_ref(), command)?;
    repository.insert(&note).await?;
    info!(note_id = %note.id, "note created");
    Ok(note)
}

// Server side delete. Confirmation is a client concern; a request that
// reaches the API is already confirmed.

use crate::modules::notes::adapters::outbound::note_repository::NoteRepository;
use crate::modules::notes::core::validation::DecideError;
use crate::modules::notes::use_cases::application_error::ApplicationError;
use tracing::info;

pub async fn handle(repository: &NoteRepository, note_id: &str) -> Result<(), ApplicationError> {
    if repository.find(note_id).await?.is_none() {
        return Err(DecideError::NotFound.into());
    }
    repository.remove(note_id).await?;
    info!(note_id, "note deleted");
    Ok(())
}

use crate::modules::notes::adapters::outbound::note_repository::NoteRepository;
use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::sort_order::SortOrder;
use crate::modules::notes::use_cases::application_error::ApplicationError;
use crate::modules::notes::use_cases::list_notes::query::list_notes;

pub async fn handle(
    repository: &NoteRepository,
    search: &str,
    sort: SortOrder,
) -> Result<Vec<Note>, ApplicationError> {
    let notes = repository.list_all().await?;
    Ok(list_notes(&notes, search, sort))
}

use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::notes::core::note::new_note_id;
use crate::modules::notes::use_cases::create_note::command::CreateNote;
use crate::modules::notes::use_cases::create_note::handler;
use crate::modules::notes::use_cases::list_notes::inbound::graphql::GqlNote;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateNoteMutation;

#[Object]
impl CreateNoteMutation {
    async fn create_note(
        &self,
        context: &Context<'_>,
        title: String,
        body: String,
    ) -> GqlResult<GqlNote> {
        let state = context.data_unchecked::<AppState>();

        let command = CreateNote {
            note_id: new_note_id(),
            title,
            body,
            created_at: Utc::now(),
        };

        let note = handler::handle(&state.notes, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(note.into())
    }
}

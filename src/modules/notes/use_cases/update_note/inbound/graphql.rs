use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::notes::use_cases::list_notes::inbound::graphql::GqlNote;
use crate::modules::notes::use_cases::update_note::command::UpdateNote;
use crate::modules::notes::use_cases::update_note::handler;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateNoteMutation;

#[Object]
impl UpdateNoteMutation {
    async fn update_note(
        &self,
        context: &Context<'_>,
        id: ID,
        title: String,
        body: String,
    ) -> GqlResult<GqlNote> {
        let state = context.data_unchecked::<AppState>();

        let command = UpdateNote {
            note_id: id.0,
            title,
            body,
            updated_at: Utc::now(),
        };

        let note = handler::handle(&state.notes, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(note.into())
    }
}

use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::notes::use_cases::delete_note::handler;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteNoteMutation;

#[Object]
impl DeleteNoteMutation {
    /// Resolves to `true` once the note is gone from the store.
    async fn delete_note(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        handler::handle(&state.notes, &id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}

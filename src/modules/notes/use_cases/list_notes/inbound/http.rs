use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::modules::notes::core::sort_order::SortOrder;
use crate::modules::notes::use_cases::application_error::ApplicationError;
use crate::modules::notes::use_cases::envelopes::NotesEnvelope;
use crate::modules::notes::use_cases::list_notes::handler;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListNotesParams {
    pub search: Option<String>,
    pub sort: Option<SortOrder>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListNotesParams>,
) -> Result<Json<NotesEnvelope>, ApplicationError> {
    let notes = handler::handle(
        &state.notes,
        params.search.as_deref().unwrap_or_default(),
        params.sort.unwrap_or_default(),
    )
    .await?;
    Ok(Json(NotesEnvelope { notes }))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::notes::use_cases::application_error::ApplicationError;
use crate::modules::notes::use_cases::delete_note::handler;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, ApplicationError> {
    handler::handle(&state.notes, &note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::notes::use_cases::envelopes::{NoteEnvelope, UpdateNoteRequest};
use crate::modules::notes::use_cases::update_note::command::UpdateNote;
use crate::modules::notes::use_cases::update_note::handler;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateNote {
        note_id,
        title: body.title,
        body: body.body,
        updated_at: Utc::now(),
    };

    match handler::handle(&state.notes, command).await {
        Ok(note) => Json(NoteEnvelope { note }).into_response(),
        Err(error) => error.into_response(),
    }
}

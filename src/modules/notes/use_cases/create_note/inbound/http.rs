use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::notes::core::note::new_note_id;
use crate::modules::notes::use_cases::create_note::command::CreateNote;
use crate::modules::notes::use_cases::create_note::handler;
use crate::modules::notes::use_cases::envelopes::{CreateNoteRequest, NoteEnvelope};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateNote {
        note_id: body
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(new_note_id),
        title: body.title,
        body: body.body,
        created_at: Utc::now(),
    };

    match handler::handle(&state.notes, command).await {
        Ok(note) => (StatusCode::CREATED, Json(NoteEnvelope { note })).into_response(),
        Err(error) => error.into_response(),
    }
}

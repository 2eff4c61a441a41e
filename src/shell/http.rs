use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::modules::notes::core::validation::DecideError;
use crate::modules::notes::use_cases::application_error::ApplicationError;
use crate::modules::notes::use_cases::create_note::inbound::http as create_http;
use crate::modules::notes::use_cases::delete_note::inbound::http as delete_http;
use crate::modules::notes::use_cases::list_notes::inbound::http as list_http;
use crate::modules::notes::use_cases::update_note::inbound::http as update_http;
use crate::shared::infrastructure::document_store::StoreError;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/notes", get(list_http::handle).post(create_http::handle))
        .route(
            "/notes/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, traced and open to any origin.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(DecideError::EmptyTitle | DecideError::EmptyBody) => {
                StatusCode::BAD_REQUEST
            }
            Self::Domain(DecideError::AlreadyExists) | Self::Store(StoreError::Conflict { .. }) => {
                StatusCode::CONFLICT
            }
            Self::Domain(DecideError::NotFound) | Self::Store(StoreError::NotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            Self::Store(StoreError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

use crate::modules::notes::adapters::outbound::notes_api_http::HttpNotesApi;
use crate::modules::notes::controller::DeleteOutcome;
use crate::modules::notes::core::sort_order::SortOrder;
use crate::modules::notes::session::NotesSession;
use crate::shared::config::DatabaseConfig;
use crate::shared::infrastructure::document_store::in_memory::InMemoryStore;
use crate::shell::database::bootstrap;
use crate::shell::http::app;
use crate::shell::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn manages_notes_over_rest() {
    let app = app(AppState::new(Arc::new(InMemoryStore::new()), "notes"));

    for (title, body) in [("Welcome", "Welcome to your notes app!"), ("Groceries", "Milk")] {
        let (status, _) = call(
            &app,
            json_request("POST", "/notes", json!({ "title": title, "body": body })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = call(
        &app,
        Request::get("/notes?sort=alphabetical").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = listed["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Groceries", "Welcome"]);

    let id = listed["notes"][0]["_id"].as_str().unwrap().to_string();
    let (status, updated) = call(
        &app,
        json_request(
            "PUT",
            &format!("/notes/{id}"),
            json!({ "title": "Groceries", "body": "Milk and bread" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["note"]["body"], "Milk and bread");

    let (_, searched) = call(
        &app,
        Request::get("/notes?search=BREAD").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(searched["notes"].as_array().unwrap().len(), 1);
    assert_eq!(searched["notes"][0]["_id"], id.as_str());

    let (status, _) = call(
        &app,
        Request::delete(format!("/notes/{id}")).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(
        &app,
        Request::delete(format!("/notes/{id}")).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, remaining) = call(&app, Request::get("/notes").body(Body::empty()).unwrap()).await;
    assert_eq!(remaining["notes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn answers_503_when_the_database_was_never_reached() {
    let store = bootstrap(&DatabaseConfig {
        url: Some("http://127.0.0.1:9".to_string()),
        name: "notes".to_string(),
    })
    .await;
    let app = app(AppState::new(store, "notes"));

    let (status, _) = call(&app, Request::get("/notes").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = call(
        &app,
        json_request("POST", "/notes", json!({ "title": "T", "body": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn session_syncs_with_a_running_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(Arc::new(InMemoryStore::new()), "notes");
    tokio::spawn(axum::serve(listener, app(state.clone())).into_future());

    let api = HttpNotesApi::new(&format!("http://{addr}")).unwrap();
    let mut session = NotesSession::new(api);
    session.load().await;
    assert!(session.controller().is_empty());
    assert_eq!(session.controller().error(), None);

    let note = session.create("Todo", "Ship it").await.unwrap();
    let stored = state.notes.find(&note.id).await.unwrap().unwrap();
    assert_eq!(stored, note);
    assert_eq!(session.controller().find(&note.id), Some(&stored));

    let note = session.update(&note.id, "Todo", "Shipped").await.unwrap();
    assert_eq!(session.controller().error(), None);

    let stored = state.notes.find(&note.id).await.unwrap().unwrap();
    assert_eq!(stored, note);
    assert_eq!(stored.body, "Shipped");
    assert!(stored.updated_at.is_some());
    assert_eq!(session.controller().find(&note.id), Some(&stored));

    let mut reloaded = NotesSession::new(HttpNotesApi::new(&format!("http://{addr}")).unwrap());
    reloaded.load().await;
    assert_eq!(reloaded.controller().notes(), session.controller().notes());

    assert_eq!(session.delete(&note.id).await, DeleteOutcome::Armed);
    assert!(matches!(
        session.delete(&note.id).await,
        DeleteOutcome::Removed(_)
    ));
    assert_eq!(session.controller().error(), None);
    assert!(state.notes.list_all().await.unwrap().is_empty());

    let mut emptied = NotesSession::new(HttpNotesApi::new(&format!("http://{addr}")).unwrap());
    emptied.load().await;
    assert!(emptied.controller().list("", SortOrder::Newest).is_empty());
}

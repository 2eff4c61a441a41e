// Port for the remote document database.
//
// Documents are JSON objects keyed by id inside named collections. Adapters
// live next to the port: an HTTP store, an in memory store for tests and
// local development, and the store installed when the startup connection
// fails.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("document store unavailable")]
    Unavailable,

    #[error("document {id} already exists in {collection}")]
    Conflict { collection: String, id: String },

    #[error("document {id} not found in {collection}")]
    NotFound { collection: String, id: String },

    #[error("invalid connection string: {0}")]
    InvalidUrl(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Handshake with the store.
    async fn ping(&self) -> Result<(), StoreError>;
    /// Creates the collection when it does not exist yet.
    async fn ensure_collection(&self, collection: &str) -> Result<(), StoreError>;
    async fn find_all(&self, collection: &str) -> Result<Vec<Json>, StoreError>;
    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Json>, StoreError>;
    async fn insert(&self, collection: &str, id: &str, document: Json) -> Result<(), StoreError>;
    async fn replace(&self, collection: &str, id: &str, document: Json) -> Result<(), StoreError>;
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

pub mod couchdb;
pub mod disconnected;
pub mod in_memory;

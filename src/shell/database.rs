use std::sync::Arc;
use tracing::{error, info};

use crate::shared::config::DatabaseConfig;
use crate::shared::infrastructure::document_store::couchdb::CouchDbStore;
use crate::shared::infrastructure::document_store::disconnected::DisconnectedStore;
use crate::shared::infrastructure::document_store::in_memory::InMemoryStore;
use crate::shared::infrastructure::document_store::{DocumentStore, StoreError};

pub const IN_MEMORY_URL: &str = "memory://";

/// Opens the document store named by the configuration and makes sure the
/// notes collection exists.
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| StoreError::InvalidUrl("DB_URL is not set".to_string()))?;

    let store: Arc<dyn DocumentStore> = if url.starts_with(IN_MEMORY_URL) {
        Arc::new(InMemoryStore::new())
    } else {
        Arc::new(CouchDbStore::new(url)?)
    };

    store.ping().await?;
    store.ensure_collection(&config.name).await?;
    Ok(store)
}

/// Like [`connect`], but never fails: the service keeps running and every
/// request answers 503 until it is restarted with a reachable store.
pub async fn bootstrap(config: &DatabaseConfig) -> Arc<dyn DocumentStore> {
    match connect(config).await {
        Ok(store) => {
            info!(collection = %config.name, "Connected to database");
            store
        }
        Err(error) => {
            error!(%error, "Error connecting to database");
            Arc::new(DisconnectedStore)
        }
    }
}

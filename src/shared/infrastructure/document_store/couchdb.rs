// HTTP document store speaking the CouchDB API.
//
// - A collection is a database: `PUT /{db}` creates it.
// - Documents live at `/{db}/{id}`; writes over an existing document need
//   its current `_rev`, which is fetched right before the write.
// - `_rev` never leaves this adapter.
// - Credentials in the connection string are sent as basic auth and
//   stripped from the URL used for requests.

use crate::shared::infrastructure::document_store::{DocumentStore, StoreError};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::debug;

const REVISION: &str = "_rev";
const DESIGN_PREFIX: &str = "_design/";

#[derive(Debug, Clone)]
pub struct CouchDbStore {
    client: Client,
    base_url: Url,
    credentials: Option<(String, Option<String>)>,
}

#[derive(Deserialize)]
struct AllDocs {
    rows: Vec<AllDocsRow>,
}

#[derive(Deserialize)]
struct AllDocsRow {
    id: String,
    #[serde(default)]
    doc: Option<Json>,
}

impl CouchDbStore {
    pub fn new(connection_string: &str) -> Result<Self, StoreError> {
        let mut base_url =
            Url::parse(connection_string).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(StoreError::InvalidUrl(format!(
                "unsupported scheme: {}",
                base_url.scheme()
            )));
        }

        let credentials = if base_url.username().is_empty() {
            None
        } else {
            Some((
                base_url.username().to_string(),
                base_url.password().map(str::to_string),
            ))
        };
        base_url
            .set_username("")
            .and_then(|_| base_url.set_password(None))
            .map_err(|_| StoreError::InvalidUrl("cannot strip credentials".into()))?;

        Ok(Self {
            client: Client::new(),
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.credentials {
            Some((username, password)) => builder.basic_auth(username, password.as_ref()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, StoreError> {
        builder.send().await.map_err(transport_error)
    }

    async fn fetch(&self, collection: &str, id: &str) -> Result<Option<Json>, StoreError> {
        let url = self.endpoint(&[collection, id])?;
        let response = self.send(self.request(Method::GET, url)).await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => response
                .json::<Json>()
                .await
                .map(Some)
                .map_err(|e| StoreError::Backend(e.to_string())),
            status => Err(unexpected(status)),
        }
    }

    async fn revision(&self, collection: &str, id: &str) -> Result<String, StoreError> {
        self.fetch(collection, id)
            .await?
            .as_ref()
            .and_then(|doc| doc.get(REVISION))
            .and_then(Json::as_str)
            .map(str::to_string)
            .ok_or_else(|| not_found(collection, id))
    }
}

#[async_trait]
impl DocumentStore for CouchDbStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let response = self
            .send(self.request(Method::GET, self.base_url.clone()))
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(unexpected(status));
        }
        debug!(url = %self.base_url, "document store answered handshake");
        Ok(())
    }

    async fn ensure_collection(&self, collection: &str) -> Result<(), StoreError> {
        let url = self.endpoint(&[collection])?;
        let response = self.send(self.request(Method::PUT, url)).await?;
        match response.status() {
            StatusCode::PRECONDITION_FAILED => Ok(()),
            status if status.is_success() => {
                debug!(collection, "created collection");
                Ok(())
            }
            status => Err(unexpected(status)),
        }
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Json>, StoreError> {
        let url = self.endpoint(&[collection, "_all_docs"])?;
        let response = self
            .send(
                self.request(Method::GET, url)
                    .query(&[("include_docs", "true")]),
            )
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status if status.is_success() => {
                let all_docs = response
                    .json::<AllDocs>()
                    .await
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
                Ok(all_docs
                    .rows
                    .into_iter()
                    .filter(|row| !row.id.starts_with(DESIGN_PREFIX))
                    .filter_map(|row| row.doc)
                    .map(without_revision)
                    .collect())
            }
            status => Err(unexpected(status)),
        }
    }

    async fn find_one(&self, collection: &str, id: &str) -> Result<Option<Json>, StoreError> {
        Ok(self.fetch(collection, id).await?.map(without_revision))
    }

    async fn insert(&self, collection: &str, id: &str, document: Json) -> Result<(), StoreError> {
        let url = self.endpoint(&[collection, id])?;
        let response = self
            .send(self.request(Method::PUT, url).json(&document))
            .await?;
        match response.status() {
            StatusCode::CONFLICT => Err(conflict(collection, id)),
            status if status.is_success() => Ok(()),
            status => Err(unexpected(status)),
        }
    }

    async fn replace(&self, collection: &str, id: &str, document: Json) -> Result<(), StoreError> {
        let revision = self.revision(collection, id).await?;
        let mut document = document;
        if let Some(object) = document.as_object_mut() {
            object.insert(REVISION.to_string(), Json::String(revision));
        }
        let url = self.endpoint(&[collection, id])?;
        let response = self
            .send(self.request(Method::PUT, url).json(&document))
            .await?;
        match response.status() {
            StatusCode::CONFLICT => Err(conflict(collection, id)),
            StatusCode::NOT_FOUND => Err(not_found(collection, id)),
            status if status.is_success() => Ok(()),
            status => Err(unexpected(status)),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let revision = self.revision(collection, id).await?;
        let url = self.endpoint(&[collection, id])?;
        let response = self
            .send(
                self.request(Method::DELETE, url)
                    .query(&[("rev", revision.as_str())]),
            )
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(not_found(collection, id)),
            StatusCode::CONFLICT => Err(conflict(collection, id)),
            status if status.is_success() => Ok(()),
            status => Err(unexpected(status)),
        }
    }
}

fn without_revision(mut document: Json) -> Json {
    if let Some(object) = document.as_object_mut() {
        object.remove(REVISION);
    }
    document
}

fn transport_error(error: reqwest::Error) -> StoreError {
    if error.is_connect() || error.is_timeout() {
        StoreError::Unavailable
    } else {
        StoreError::Backend(error.to_string())
    }
}

fn unexpected(status: StatusCode) -> StoreError {
    StoreError::Backend(format!("unexpected status {status}"))
}

fn conflict(collection: &str, id: &str) -> StoreError {
    StoreError::Conflict {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

fn not_found(collection: &str, id: &str) -> StoreError {
    StoreError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

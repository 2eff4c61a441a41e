// `NotesApi` over the backend's REST routes.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::modules::notes::adapters::outbound::notes_api::{NotesApi, NotesApiError};
use crate::modules::notes::core::note::Note;
use crate::modules::notes::use_cases::envelopes::{
    CreateNoteRequest, NoteEnvelope, NotesEnvelope, UpdateNoteRequest,
};

const NOTES: &str = "notes";

#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    client: Client,
    base_url: Url,
}

impl HttpNotesApi {
    pub fn new(base_url: &str) -> Result<Self, NotesApiError> {
        let base_url = Url::parse(base_url).map_err(|e| NotesApiError::Transport(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(NotesApiError::Transport(format!(
                "{base_url} cannot be used as a base url"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, NotesApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NotesApiError::Transport(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list(&self) -> Result<Vec<Note>, NotesApiError> {
        let response = self
            .client
            .get(self.endpoint(&[NOTES])?)
            .send()
            .await
            .map_err(transport_error)?;
        let envelope: NotesEnvelope = decode(response).await?;
        Ok(envelope.notes)
    }

    async fn create(&self, note: &Note) -> Result<Note, NotesApiError> {
        let request = CreateNoteRequest {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            body: note.body.clone(),
        };
        let response = self
            .client
            .post(self.endpoint(&[NOTES])?)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let envelope: NoteEnvelope = decode(response).await?;
        Ok(envelope.note)
    }

    async fn update(&self, note: &Note) -> Result<Note, NotesApiError> {
        let request = UpdateNoteRequest {
            title: note.title.clone(),
            body: note.body.clone(),
        };
        let response = self
            .client
            .put(self.endpoint(&[NOTES, &note.id])?)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        let envelope: NoteEnvelope = decode(response).await?;
        Ok(envelope.note)
    }

    async fn delete(&self, id: &str) -> Result<(), NotesApiError> {
        let response = self
            .client
            .delete(self.endpoint(&[NOTES, id])?)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(&response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, NotesApiError> {
    ensure_success(&response)?;
    response.json::<T>().await.map_err(transport_error)
}

fn ensure_success(response: &Response) -> Result<(), NotesApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(NotesApiError::Status {
            status: status.as_u16(),
        })
    }
}

fn transport_error(error: reqwest::Error) -> NotesApiError {
    NotesApiError::Transport(error.to_string())
}

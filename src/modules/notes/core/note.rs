// Note record as owned by the client collection and persisted by the document store.
//
// Wire format
// - camelCase fields, identifier under `_id`, RFC 3339 timestamps.
// - `updatedAt` is omitted until the note is edited.
// - Unknown fields (for example a store revision) are ignored on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }

    pub fn edited(&self, title: String, body: String, at: DateTime<Utc>) -> Note {
        Note {
            id: self.id.clone(),
            title,
            body,
            created_at: self.created_at,
            updated_at: Some(at),
        }
    }
}

pub fn new_note_id() -> String {
    Uuid::now_v7().to_string()
}

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNote {
    pub note_id: String,
    pub title: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

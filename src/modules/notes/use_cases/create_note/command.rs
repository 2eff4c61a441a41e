// Command data type for creating a note.
//
// - Carries the identifier and creation time chosen by the caller, so the
//   decider stays free of clocks and id generators.
// - Independent of the transport (controller, HTTP or GraphQL).

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNote {
    pub note_id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::notes::core::note::Note;
use crate::modules::notes::core::sort_order::SortOrder;
use crate::modules::notes::use_cases::list_notes::handler;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlNote {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Note> for GqlNote {
    fn from(n: Note) -> Self {
        Self {
            id: ID(n.id),
            title: n.title,
            body: n.body,
            created_at: wire_timestamp(n.created_at),
            updated_at: n.updated_at.map(wire_timestamp),
        }
    }
}

/// Same form as the REST body: `Z` suffix, fractional seconds only when set.
fn wire_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlSortOrder {
    Newest,
    Oldest,
    Alphabetical,
}

impl From<GqlSortOrder> for SortOrder {
    fn from(sort: GqlSortOrder) -> Self {
        match sort {
            GqlSortOrder::Newest => SortOrder::Newest,
            GqlSortOrder::Oldest => SortOrder::Oldest,
            GqlSortOrder::Alphabetical => SortOrder::Alphabetical,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn notes(
        &self,
        context: &Context<'_>,
        search: Option<String>,
        sort: Option<GqlSortOrder>,
    ) -> GqlResult<Vec<GqlNote>> {
        let state = context.data_unchecked::<AppState>();
        let notes = handler::handle(
            &state.notes,
            search.as_deref().unwrap_or_default(),
            sort.map(Into::into).unwrap_or_default(),
        )
        .await?;
        Ok(notes.into_iter().map(Into::into).collect())
    }
}

use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::notes::use_cases::create_note::inbound::graphql::CreateNoteMutation;
use crate::modules::notes::use_cases::delete_note::inbound::graphql::DeleteNoteMutation;
pub use crate::modules::notes::use_cases::list_notes::inbound::graphql::QueryRoot;
use crate::modules::notes::use_cases::update_note::inbound::graphql::UpdateNoteMutation;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateNoteMutation, UpdateNoteMutation, DeleteNoteMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

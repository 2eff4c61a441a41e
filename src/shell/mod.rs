// Composition root for the notes service.
//
// Reads configuration, connects to the document store, wires the
// repository into the REST and GraphQL surfaces and serves them.

pub mod database;
pub mod graphql;
pub mod http;
pub mod state;

// Composition root.
//
// - Read config from the environment.
// - Load the seed and build the entity store.
// - Wire the store into the handlers, the schema and the HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

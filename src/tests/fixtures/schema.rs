use crate::modules::planner::adapters::outbound::entity_store_in_memory::InMemoryEntityStore;
use crate::modules::planner::adapters::outbound::seed::Seed;
use crate::shell::graphql::{AppSchema, AppState, build_schema};
use async_graphql::Request;
use serde_json::Value;
use std::sync::Arc;

pub type StoreAndSchema = (Arc<InMemoryEntityStore>, AppSchema);

pub fn make_schema(seed: Seed) -> StoreAndSchema {
    make_schema_with_store(InMemoryEntityStore::from_seed(seed))
}

pub fn make_schema_with_store(store: InMemoryEntityStore) -> StoreAndSchema {
    let store = Arc::new(store);
    let schema = build_schema(AppState::new(store.clone()));
    (store, schema)
}

/// Executes `document` and returns the whole response (`data` and `errors`) as JSON.
pub async fn execute(schema: &AppSchema, document: &str) -> Value {
    let response = schema.execute(Request::new(document)).await;
    serde_json::to_value(&response).unwrap()
}

pub fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

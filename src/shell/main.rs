use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_planner::modules::planner::adapters::outbound::entity_store_in_memory::InMemoryEntityStore;
use event_planner::modules::planner::adapters::outbound::seed::Seed;
use event_planner::shell::config::AppConfig;
use event_planner::shell::graphql::{AppState, build_schema};
use event_planner::shell::http::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("LOG_LEVEL is not a valid filter")?;
    fmt().with_env_filter(filter).init();

    let seed = match &config.seed_path {
        Some(path) => Seed::load(path)?,
        None => Seed::bundled()?,
    };
    tracing::info!(
        users = seed.users.len(),
        events = seed.events.len(),
        locations = seed.locations.len(),
        participants = seed.participants.len(),
        "seed loaded"
    );

    let store = Arc::new(InMemoryEntityStore::from_seed(seed));
    let schema = build_schema(AppState::new(store));
    let app = router(schema, &config.graphql_path);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("GraphQL endpoint: http://{}{}", addr, config.graphql_path);
    axum::serve(listener, app).await?;
    Ok(())
}

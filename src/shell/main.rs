use tracing_subscriber::{EnvFilter, fmt};

use notes::shared::config::Config;
use notes::shell::database::bootstrap;
use notes::shell::graphql::GRAPHQL_PATH;
use notes::shell::http::app;
use notes::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = bootstrap(&config.database).await;
    let state = AppState::new(store, config.database.name.clone());

    let addr = config.bind_address()?;
    tracing::info!(environment = ?config.environment, "Server running on http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

pub mod app;
pub mod handlers;

use anyhow::Result;
use tracing::info;

use crate::app_context::AppContext;
use crate::config::ServerConfig;
use crate::store::create_store;

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let store = create_store(&config.storage).await?;
    let app = app::create_app(AppContext::new(store), config.cors_origin.as_deref())?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & Playground (GET)");
}

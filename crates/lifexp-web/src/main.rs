//! Life Expectancy Explorer web server
//!
//! Run with: cargo run -p lifexp-web

use anyhow::Context;
use lifexp_config::ExplorerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ExplorerConfig::load()?;
    lifexp_web::telemetry::init(&config.log_level)?;

    info!("Starting Life Expectancy Explorer...");

    let state = lifexp_web::state::AppState::new(config.clone())?;

    // The app is unusable without data: fail before binding the port.
    let dataset = state
        .dataset()
        .with_context(|| format!("Failed to load dataset {}", config.data.path.display()))?;
    info!(
        "Dataset ready: {} records, continents {:?}",
        dataset.len(),
        dataset.continents()
    );

    let app = lifexp_web::router::build_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

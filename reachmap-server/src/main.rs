mod api;
mod state;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use reachmap_core::config::ReachConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

/// HTTP front end for reachable-area processing
#[derive(Parser, Debug)]
#[command(name = "reachmap-server", version, about)]
struct Args {
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides `server.bind`
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ReachConfig::load(path)?,
        None => ReachConfig::default(),
    };
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    let state = Arc::new(AppState::from_config(&config)?);
    let app = api::build_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
        config.server.concurrency_limit,
    );

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}

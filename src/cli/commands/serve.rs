//! `serve` command: run the HTTP search server until Ctrl-C.

use anyhow::{anyhow, Result};
use tracing::info;

use crate::adapters::http::SearchHttpServer;
use crate::application::build_search_service;
use crate::cli::types::ServeArgs;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Apply the command-line overrides and start serving.
pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
    let config = apply_overrides(args, config)?;

    let service = build_search_service(&config)?;
    let server = SearchHttpServer::new(service, config.server.clone());

    server
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("Search HTTP server failed: {e}"))?;

    info!("Search HTTP server stopped");
    Ok(())
}

/// Merge `--host`/`--port` into the loaded config and validate the result.
pub fn apply_overrides(args: ServeArgs, mut config: Config) -> Result<Config> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    ConfigLoader::validate(&config)?;
    Ok(config)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

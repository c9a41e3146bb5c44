use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use leptos::prelude::LeptosOptions;
use tracing::info;

use nx_api::state::{ApiState, AppState};
use nx_common::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,netexplorer=debug,nx_api=debug,nx_web=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    info!("NetExplorer starting...");

    let config_path = Config::path();
    let config = Config::load_from_file(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let config = Arc::new(config);

    let listen_addr: SocketAddr = config
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {:?}", config.server.listen_addr))?;

    let leptos_options = LeptosOptions::builder()
        .output_name("netexplorer")
        .site_root(config.server.site_root.clone())
        .site_addr(listen_addr)
        .build();

    let state = AppState {
        api: ApiState {
            config: config.clone(),
        },
        leptos_options,
    };
    let app = nx_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    info!(addr = %listen_addr, directory = config.directory.base_url, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("NetExplorer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        return;
    }
    info!("Ctrl-C received, shutting down");
}

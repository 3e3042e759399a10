// rest_api/src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use rest_api::config::CliArgs;
use rest_api::start_server;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();
    let mut config = lib::load_app_config(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_overrides(&mut config);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal.");
    };

    start_server(config, shutdown).await
}

// rest_api/src/config.rs

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lib::config::{AppConfig, ServerConfig};
use lib::engine::HeuristicVariant;

/// Command line for `akatsuki-server`. Flags override the config file and
/// `AKATSUKI__*` environment variables.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "akatsuki-server", version, about = "Hospital crowd and wait time predictor API")]
pub struct CliArgs {
    /// Path to a TOML/YAML/JSON config file.
    #[arg(short, long, env = "AKATSUKI_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// `standard` or `legacy`.
    #[arg(long)]
    pub heuristic: Option<HeuristicVariant>,

    /// Seed for reproducible estimates.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub frontend_dir: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(variant) = self.heuristic {
            config.heuristic.variant = variant;
        }
        if let Some(seed) = self.seed {
            config.heuristic.seed = Some(seed);
        }
        if let Some(dir) = &self.frontend_dir {
            config.frontend.dir = dir.clone();
        }
    }
}

pub fn socket_addr(server: &ServerConfig) -> Result<SocketAddr> {
    let ip: IpAddr = server
        .host
        .parse()
        .with_context(|| format!("Invalid server host: {}", server.host))?;
    Ok(SocketAddr::new(ip, server.port))
}

// lib/src/config/config_structs.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;
use crate::engine::policy::HeuristicVariant;

/// Top-level service configuration. Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub frontend: FrontendConfig,
    pub models: ModelConfig,
    pub heuristic: HeuristicConfig,
    pub slots: SlotConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub dir: PathBuf,
    pub index_file: String,
}

impl FrontendConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index_file)
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig { dir: default_frontend_dir(), index_file: default_index_file() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub crowd_path: PathBuf,
    pub wait_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            crowd_path: default_crowd_model_path(),
            wait_path: default_wait_model_path(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub variant: HeuristicVariant,
    /// Seeds the shared generator. Unset means OS entropy.
    pub seed: Option<u64>,
}

/// Recommended appointment slots: `count` slots `spacing_minutes` apart,
/// the first `after_minutes` from now.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    pub after_minutes: i64,
    pub count: usize,
    pub spacing_minutes: i64,
}

impl Default for SlotConfig {
    fn default() -> Self {
        SlotConfig {
            after_minutes: default_slot_after_minutes(),
            count: default_slot_count(),
            spacing_minutes: default_slot_spacing_minutes(),
        }
    }
}

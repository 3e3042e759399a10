// lib/src/config/config_defaults.rs
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "akatsuki";
pub const ENV_PREFIX: &str = "AKATSUKI";
pub const ENV_SEPARATOR: &str = "__";

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8000
}

pub fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}

pub fn default_index_file() -> String {
    "index1.html".to_string()
}

pub fn default_crowd_model_path() -> PathBuf {
    PathBuf::from("model_crowd.json")
}

pub fn default_wait_model_path() -> PathBuf {
    PathBuf::from("model_wait.json")
}

pub fn default_slot_after_minutes() -> i64 {
    10
}

pub fn default_slot_count() -> usize {
    4
}

pub fn default_slot_spacing_minutes() -> i64 {
    30
}

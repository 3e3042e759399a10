// lib/src/config/config_helpers.rs
use std::path::Path;

use config::{Config, Environment, File};
use tracing::debug;

use crate::config::config_defaults::{DEFAULT_CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};
use crate::config::config_structs::AppConfig;
use crate::errors::PredictorResult;

/// Builds the configuration from, in increasing priority: built-in defaults,
/// the config file, and `AKATSUKI__SECTION__KEY` environment variables.
///
/// An explicit `path` must exist. Without one, `akatsuki.{toml,yaml,json}` in
/// the working directory is read if present.
pub fn load_app_config(path: Option<&Path>) -> PredictorResult<AppConfig> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    debug!("Loaded configuration: {:?}", app_config);
    Ok(app_config)
}

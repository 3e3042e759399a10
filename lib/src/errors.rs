// lib/src/errors.rs
use std::io;
use std::path::PathBuf;

pub use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("Failed to read model file {}: {source}", path.display())]
    ModelIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid model file {}: {source}", path.display())]
    ModelFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Model expects {expected} features, got {got}")]
    FeatureShape { expected: usize, got: usize },
    #[error("Model produced a non-finite output: {0}")]
    NonFiniteOutput(f64),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PredictorResult<T> = Result<T, PredictorError>;

// models/src/errors.rs
pub use thiserror::Error;

/// Errors raised when parsing textual values into model types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown heuristic variant '{0}'")]
    UnknownHeuristicVariant(String),
}

//! Error types for the breakdown library

use thiserror::Error;

/// Errors raised at the edges of the library
///
/// The diff engine itself never fails; these cover settings loading and
/// payload decoding.
#[derive(Debug, Error)]
pub enum BreakdownError {
    #[error("failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("failed to decode recommendations payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unknown recommendation interval: {0}")]
    UnknownInterval(String),

    #[error("unknown optimization engine: {0}")]
    UnknownEngine(String),
}

pub type Result<T> = std::result::Result<T, BreakdownError>;

//! # CLI Errors
//!
//! Everything the harness can fail with. `main` prints the message to
//! stderr and exits non-zero.

use std::path::PathBuf;

use basket_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Unknown product code or malformed rules.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to read rules file {}: {source}", path.display())]
    ReadRules {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),
}

pub type CliResult<T> = Result<T, CliError>;

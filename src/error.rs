use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of the pipeline. Parsing itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, AppError>;

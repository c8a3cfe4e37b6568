use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read input list {path:?}: {source}")]
    ListFile {
        path: PathBuf,
        source: parbatch::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Run(#[from] parbatch::Error),
}

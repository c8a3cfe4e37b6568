//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O errors, and provides semantic variants for template
//! rendering and sbatch submission failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown placeholder {{{name}}} in command template; supported placeholders are {{query}} and {{cwd}}")]
    UnknownPlaceholder { name: String },

    #[error("Malformed command template: {0}")]
    Template(String),

    #[error("Stack size must be greater than 0, got: {stack}")]
    ZeroStack { stack: usize },

    #[error("sbatch error: {stderr}")]
    Sbatch { stderr: String },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    /// Navigation wraps modulo the bank size, so an empty bank is unusable.
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("failed to read question file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("failed to open dialogue storage: {0}")]
    Storage(String),
}

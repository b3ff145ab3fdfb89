use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("I/O error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, SnapeError>;

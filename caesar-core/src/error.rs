//! Error types for cipher and history operations

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaesarError {
    #[error("Invalid input: text must not be empty")]
    InvalidInput,

    #[error("Invalid key {0} (must be in -255..=255)")]
    InvalidKey(i32),

    #[error("Failed to load history: {0}")]
    HistoryLoad(String),

    #[error("Failed to persist history to {path}: {source}")]
    HistoryPersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CaesarError>;

//! Bounded, persisted log of past cipher operations
//!
//! Append-only in semantics: records are immutable once created and only
//! ever leave the log through FIFO eviction when the capacity bound is
//! exceeded. The whole log is rewritten to disk after every append
//! (write-through, no batching). A missing or corrupt history file never
//! fails the caller; it degrades to an empty log with a logged warning.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CaesarError;

/// Maximum number of records the log retains.
pub const MAX_ENTRIES: usize = 100;

/// Default history file name, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "caesar_history.json";

/// Which validated transform produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Encrypt,
    Decrypt,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Encrypt => write!(f, "encrypt"),
            OperationKind::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// One completed encrypt or decrypt operation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Creation time, serialized as an ISO-8601 string.
    pub timestamp: DateTime<Utc>,
    pub operation: OperationKind,
    pub input_text: String,
    pub output_text: String,
    pub shift: i32,
}

impl Operation {
    /// Builds a record stamped with the current time.
    pub fn new(operation: OperationKind, input_text: &str, output_text: &str, shift: i32) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            input_text: input_text.to_string(),
            output_text: output_text.to_string(),
            shift,
        }
    }
}

/// The operation log together with its backing file.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: VecDeque<Operation>,
}

impl HistoryStore {
    /// Loads the history from `path`.
    ///
    /// A missing file yields an empty log. An unreadable or malformed file
    /// also yields an empty log, with a warning on the log sink; history
    /// corruption is never fatal.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path: PathBuf = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<Operation>>(&raw) {
                Ok(records) => {
                    debug!(count = records.len(), path = %path.display(), "loaded history");
                    VecDeque::from(records)
                }
                Err(err) => {
                    warn!(
                        "{}",
                        CaesarError::HistoryLoad(format!(
                            "malformed history file {}: {err}",
                            path.display()
                        ))
                    );
                    VecDeque::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no history file, starting empty");
                VecDeque::new()
            }
            Err(err) => {
                warn!(
                    "{}",
                    CaesarError::HistoryLoad(format!(
                        "unreadable history file {}: {err}",
                        path.display()
                    ))
                );
                VecDeque::new()
            }
        };
        Self { path, entries }
    }

    /// Appends a record, evicts the oldest entries beyond [`MAX_ENTRIES`],
    /// and rewrites the backing file.
    ///
    /// A persistence failure is logged but does not roll back the in-memory
    /// append; the new record stays in the log either way.
    pub fn append(&mut self, record: Operation) {
        self.entries.push_back(record);
        while self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.persist();
    }

    /// Returns the last `n` records, most recent first.
    pub fn recent(&self, n: usize) -> Vec<&Operation> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Number of records currently in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        let records: Vec<&Operation> = self.entries.iter().collect();
        let serialized = match serde_json::to_string_pretty(&records) {
            Ok(json) => json,
            Err(err) => {
                warn!(
                    "{}",
                    CaesarError::HistoryPersist {
                        path: self.path.clone(),
                        source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
                    }
                );
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, serialized) {
            warn!(
                "{}",
                CaesarError::HistoryPersist {
                    path: self.path.clone(),
                    source: err,
                }
            );
        }
    }
}

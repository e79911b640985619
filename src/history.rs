//! Encoded password history persistence.
//!
//! The on-disk format is a JSON array wrapped in base64. This is
//! obfuscation against casual inspection, NOT encryption: the encoding is
//! reversible and must never be treated as a confidentiality control.
//! Callers that need real secrecy must encrypt before recording.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum number of entries retained in the history file.
pub const MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to write history file: {0}")]
    WriteError(#[from] std::io::Error),
    #[error("Failed to serialize history: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// One recorded password with its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Recorder hook for callers that want generated or analyzed passwords
/// persisted. The engine itself never records anything.
pub trait HistorySink {
    fn record(
        &self,
        password: &str,
        metadata: serde_json::Map<String, serde_json::Value>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), HistoryError>;
}

/// File-backed history store.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Store at the default location.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_HISTORY_PATH`
    /// 2. Default path `./password_history.enc`
    pub fn new() -> Self {
        let path = std::env::var("PWD_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("password_history.enc"));
        Self { path }
    }

    /// Store at an explicit path.
    pub fn at_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads prior history. A missing, empty or undecodable file is
    /// treated as no prior state, never as an error.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let Ok(encoded) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        let Ok(raw) = BASE64.decode(encoded.trim()) else {
            return Vec::new();
        };
        serde_json::from_slice(&raw).unwrap_or_default()
    }

    /// Removes the history file. An already-absent file is not an error.
    pub fn clear(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySink for HistoryStore {
    /// Appends an entry, keeping only the [`MAX_HISTORY_ENTRIES`] most
    /// recent, and rewrites the encoded file.
    fn record(
        &self,
        password: &str,
        metadata: serde_json::Map<String, serde_json::Value>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), HistoryError> {
        let mut history = self.load();
        history.push(HistoryEntry {
            password: password.to_string(),
            timestamp,
            metadata,
        });

        if history.len() > MAX_HISTORY_ENTRIES {
            let excess = history.len() - MAX_HISTORY_ENTRIES;
            history.drain(..excess);
        }

        let encoded = BASE64.encode(serde_json::to_vec(&history)?);
        std::fs::write(&self.path, encoded)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("History recorded: {} entries at {:?}", history.len(), self.path);

        Ok(())
    }
}

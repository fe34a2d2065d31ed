//! Key-value persistence for the URL list.
//!
//! A store holds named records, each an ordered list of strings. The list
//! controller reads and writes one record as a whole; there are no partial
//! updates.

mod json_file;
mod memory;
mod sqlite;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::config::{StorageBackend, TabstashConfig};

/// Errors raised by a storage backend. Never retried by the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored record is not a list of strings: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("cannot locate state directory: {0}")]
    StateDir(#[from] xdg::BaseDirectoriesError),
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Asynchronous key-value storage for whole lists of strings.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the record under `key`, or `default` when none exists yet.
    async fn get(&self, key: &str, default: Vec<String>) -> Result<Vec<String>, StoreError>;

    /// Replaces the record under `key`.
    async fn set(&self, key: &str, value: &[String]) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    async fn get(&self, key: &str, default: Vec<String>) -> Result<Vec<String>, StoreError> {
        (**self).get(key, default).await
    }

    async fn set(&self, key: &str, value: &[String]) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }
}

/// State directory holding the store files: the configured override, or
/// `~/.local/state/tabstash`.
pub fn state_dir(cfg: &TabstashConfig) -> Result<PathBuf, StoreError> {
    if let Some(dir) = &cfg.state_dir {
        return Ok(dir.clone());
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tabstash")?;
    Ok(xdg_dirs.get_state_home().join("tabstash"))
}

/// Opens the backend selected in the config.
pub async fn open_configured(cfg: &TabstashConfig) -> Result<Box<dyn KeyValueStore>, StoreError> {
    let dir = state_dir(cfg)?;
    match cfg.storage_backend {
        StorageBackend::Sqlite => {
            let store = SqliteStore::open_at(dir.join("urls.db")).await?;
            Ok(Box::new(store))
        }
        StorageBackend::Json => Ok(Box::new(JsonFileStore::new(dir.join("urls.json")))),
    }
}

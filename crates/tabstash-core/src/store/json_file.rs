//! JSON-file store: a single object mapping record keys to lists, rewritten
//! whole on every write.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

type Records = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path` (usually `~/.local/state/tabstash/urls.json`).
    /// The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Records, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Records::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str, default: Vec<String>) -> Result<Vec<String>, StoreError> {
        let mut records = self.read_records().await?;
        Ok(records.remove(key).unwrap_or(default))
    }

    async fn set(&self, key: &str, value: &[String]) -> Result<(), StoreError> {
        let mut records = self.read_records().await?;
        records.insert(key.to_string(), value.to_vec());
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(&records)?;
        // Write next to the target, then rename, so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(path = %self.path.display(), key, len = value.len(), "wrote json store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("urls.json"));
        assert!(store.get("urls", Vec::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn writes_create_parent_and_keep_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state").join("urls.json"));
        store.set("other", &["keep".to_string()]).await.unwrap();
        store
            .set("urls", &["https://a.example/".to_string(), "https://b.example/".to_string()])
            .await
            .unwrap();

        assert_eq!(
            store.get("urls", Vec::new()).await.unwrap(),
            vec!["https://a.example/".to_string(), "https://b.example/".to_string()]
        );
        assert_eq!(store.get("other", Vec::new()).await.unwrap(), vec!["keep".to_string()]);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urls.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let store = JsonFileStore::new(path);
        assert!(matches!(
            store.get("urls", Vec::new()).await,
            Err(StoreError::Decode(_))
        ));
    }
}

//! The persisted URL list and its operations.
//!
//! Every operation reads the whole list, changes it, and writes the whole
//! list back. The list keeps insertion order and never holds the same
//! cleaned URL twice.

mod outcome;

pub use outcome::{AddOutcome, ClearOutcome, CopyError, CopyOutcome, RemoveOutcome};

use crate::clipboard::ClipboardWriter;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::store::{KeyValueStore, StoreError};
use crate::url_clean::{clean, is_collectible};

/// Owns the URL list record in a [`KeyValueStore`].
pub struct ListController<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ListController<S> {
    /// Controller over the default `"urls"` record.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current list, oldest first; empty when nothing has been stored yet.
    pub async fn load(&self) -> Result<Vec<String>, StoreError> {
        self.store.get(&self.key, Vec::new()).await
    }

    async fn save(&self, urls: &[String]) -> Result<(), StoreError> {
        self.store.set(&self.key, urls).await
    }

    /// Cleans `raw` and appends it unless it is uncollectable or already listed.
    pub async fn add(&self, raw: &str) -> Result<AddOutcome, StoreError> {
        if !is_collectible(raw) {
            tracing::debug!(raw, "refusing uncollectable page");
            return Ok(AddOutcome::Rejected);
        }

        let cleaned = clean(raw);
        let mut urls = self.load().await?;
        if urls.contains(&cleaned) {
            tracing::debug!(url = %cleaned, "already in list");
            return Ok(AddOutcome::AlreadyPresent(cleaned));
        }

        urls.push(cleaned.clone());
        self.save(&urls).await?;
        tracing::info!(url = %cleaned, len = urls.len(), "added url");
        Ok(AddOutcome::Added(cleaned))
    }

    /// Removes the entry at 0-based `index`; later entries move up by one.
    pub async fn remove_at(&self, index: usize) -> Result<RemoveOutcome, StoreError> {
        let mut urls = self.load().await?;
        if index >= urls.len() {
            tracing::debug!(index, len = urls.len(), "remove index out of range");
            return Ok(RemoveOutcome::OutOfRange);
        }

        let removed = urls.remove(index);
        self.save(&urls).await?;
        tracing::info!(url = %removed, index, "removed url");
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Empties the list. No write happens when it is already empty.
    pub async fn clear(&self) -> Result<ClearOutcome, StoreError> {
        let urls = self.load().await?;
        if urls.is_empty() {
            return Ok(ClearOutcome::AlreadyEmpty);
        }

        self.save(&[]).await?;
        tracing::info!(count = urls.len(), "cleared list");
        Ok(ClearOutcome::Cleared(urls.len()))
    }

    /// Puts the whole list on the clipboard, one URL per line.
    pub async fn copy_all<C>(&self, clipboard: &C) -> Result<CopyOutcome, CopyError>
    where
        C: ClipboardWriter + ?Sized,
    {
        let urls = self.load().await?;
        if urls.is_empty() {
            return Ok(CopyOutcome::NothingToCopy);
        }

        clipboard.write_text(&urls.join("\n")).await?;
        tracing::debug!(count = urls.len(), "copied list to clipboard");
        Ok(CopyOutcome::Copied(urls.len()))
    }
}

#[cfg(test)]
mod tests;

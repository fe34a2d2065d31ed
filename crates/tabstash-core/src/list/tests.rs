//! Tests for the list controller (in-memory store).

use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::clipboard::ClipboardError;
use crate::store::MemoryStore;

fn seeded(urls: &[&str]) -> ListController<MemoryStore> {
    ListController::new(MemoryStore::with_record("urls", urls))
}

#[derive(Default)]
struct RecordingClipboard {
    texts: Mutex<Vec<String>>,
}

#[async_trait]
impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

#[async_trait]
impl ClipboardWriter for BrokenClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no terminal".into()))
    }
}

#[tokio::test]
async fn load_on_fresh_store_is_empty() {
    let list = ListController::new(MemoryStore::new());
    assert!(list.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_stores_cleaned_url() {
    let list = ListController::new(MemoryStore::new());
    let outcome = list
        .add("https://shop.example.com/item?id=5&utm_source=fb&ref=abc")
        .await
        .unwrap();
    assert_eq!(
        outcome,
        AddOutcome::Added("https://shop.example.com/item?id=5".into())
    );
    assert_eq!(
        list.load().await.unwrap(),
        vec!["https://shop.example.com/item?id=5".to_string()]
    );
}

#[tokio::test]
async fn add_strips_dangling_question_mark() {
    let list = ListController::new(MemoryStore::new());
    list.add("https://a.example.com/?utm_source=x").await.unwrap();
    assert_eq!(
        list.load().await.unwrap(),
        vec!["https://a.example.com/".to_string()]
    );
}

#[tokio::test]
async fn add_twice_keeps_one_entry() {
    let list = ListController::new(MemoryStore::new());
    let first = list.add("https://example.com/page?gclid=1").await.unwrap();
    let second = list.add("https://example.com/page?gclid=2").await.unwrap();
    assert_eq!(first, AddOutcome::Added("https://example.com/page".into()));
    assert_eq!(
        second,
        AddOutcome::AlreadyPresent("https://example.com/page".into())
    );
    assert_eq!(list.load().await.unwrap().len(), 1);
    assert_eq!(list.store().write_count(), 1);
}

#[tokio::test]
async fn add_appends_in_insertion_order() {
    let list = ListController::new(MemoryStore::new());
    for u in ["https://c.example/", "https://a.example/", "https://b.example/"] {
        list.add(u).await.unwrap();
    }
    assert_eq!(
        list.load().await.unwrap(),
        vec![
            "https://c.example/".to_string(),
            "https://a.example/".to_string(),
            "https://b.example/".to_string(),
        ]
    );
}

#[tokio::test]
async fn add_rejects_internal_pages_without_writing() {
    let list = ListController::new(MemoryStore::new());
    for raw in ["", "chrome://extensions", "chrome-extension://id/popup.html", "about:blank"] {
        assert_eq!(list.add(raw).await.unwrap(), AddOutcome::Rejected);
    }
    assert_eq!(list.store().write_count(), 0);
    assert!(list.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_keeps_unparsable_input_verbatim() {
    let list = ListController::new(MemoryStore::new());
    assert_eq!(
        list.add("just some text?ref=x").await.unwrap(),
        AddOutcome::Added("just some text?ref=x".into())
    );
}

#[tokio::test]
async fn add_propagates_write_failure() {
    let list = ListController::new(MemoryStore::new());
    list.store().fail_writes(true);
    assert!(list.add("https://example.com/").await.is_err());
    list.store().fail_writes(false);
    assert!(list.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_at_shifts_later_entries() {
    let list = seeded(&["https://a.example/", "https://b.example/", "https://c.example/"]);
    assert_eq!(
        list.remove_at(1).await.unwrap(),
        RemoveOutcome::Removed("https://b.example/".into())
    );
    assert_eq!(
        list.load().await.unwrap(),
        vec!["https://a.example/".to_string(), "https://c.example/".to_string()]
    );
}

#[tokio::test]
async fn remove_at_bounds() {
    let list = seeded(&["https://a.example/", "https://b.example/"]);
    assert_eq!(list.remove_at(2).await.unwrap(), RemoveOutcome::OutOfRange);
    assert_eq!(list.remove_at(usize::MAX).await.unwrap(), RemoveOutcome::OutOfRange);
    assert_eq!(list.load().await.unwrap().len(), 2);
    assert_eq!(list.store().write_count(), 0);

    assert_eq!(
        list.remove_at(0).await.unwrap(),
        RemoveOutcome::Removed("https://a.example/".into())
    );
    assert_eq!(
        list.remove_at(0).await.unwrap(),
        RemoveOutcome::Removed("https://b.example/".into())
    );
    assert_eq!(list.remove_at(0).await.unwrap(), RemoveOutcome::OutOfRange);
}

#[tokio::test]
async fn clear_empties_and_then_reports_already_empty() {
    let list = seeded(&["https://a.example/", "https://b.example/", "https://c.example/"]);
    assert_eq!(list.clear().await.unwrap(), ClearOutcome::Cleared(3));
    assert!(list.load().await.unwrap().is_empty());
    assert_eq!(list.clear().await.unwrap(), ClearOutcome::AlreadyEmpty);
    assert_eq!(list.store().write_count(), 1);
}

#[tokio::test]
async fn copy_all_joins_with_newlines() {
    let list = seeded(&["https://a.example/", "https://b.example/?id=2"]);
    let clipboard = RecordingClipboard::default();
    assert_eq!(
        list.copy_all(&clipboard).await.unwrap(),
        CopyOutcome::Copied(2)
    );
    assert_eq!(
        clipboard.texts.lock().unwrap().as_slice(),
        ["https://a.example/\nhttps://b.example/?id=2".to_string()]
    );
}

#[tokio::test]
async fn copy_all_on_empty_list_skips_clipboard() {
    let list = ListController::new(MemoryStore::new());
    let clipboard = RecordingClipboard::default();
    assert_eq!(
        list.copy_all(&clipboard).await.unwrap(),
        CopyOutcome::NothingToCopy
    );
    assert!(clipboard.texts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn copy_all_surfaces_clipboard_failure() {
    let list = seeded(&["https://a.example/"]);
    assert!(matches!(
        list.copy_all(&BrokenClipboard).await,
        Err(CopyError::Clipboard(_))
    ));
}

#[tokio::test]
async fn custom_record_key_is_isolated() {
    let store = MemoryStore::with_record("urls", &["https://a.example/"]);
    let list = ListController::with_key(store, "reading");
    assert!(list.load().await.unwrap().is_empty());
    list.add("https://b.example/").await.unwrap();
    assert_eq!(
        list.store().get("urls", Vec::new()).await.unwrap(),
        vec!["https://a.example/".to_string()]
    );
}

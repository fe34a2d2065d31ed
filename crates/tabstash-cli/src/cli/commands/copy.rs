//! `tabstash copy` – put every URL on the clipboard.

use anyhow::{Context, Result};
use tabstash_core::clipboard::ClipboardWriter;
use tabstash_core::list::{CopyOutcome, ListController};
use tabstash_core::notice::Notice;
use tabstash_core::store::KeyValueStore;

pub async fn run_copy<S, C>(list: &ListController<S>, clipboard: &C) -> Result<CopyOutcome>
where
    S: KeyValueStore,
    C: ClipboardWriter + ?Sized,
{
    let outcome = list.copy_all(clipboard).await.context("copy URLs")?;
    println!("{}", Notice::from(outcome));
    Ok(outcome)
}

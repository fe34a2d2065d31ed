//! `tabstash remove <position>` – drop one URL by its displayed position.

use anyhow::Result;
use tabstash_core::list::{ListController, RemoveOutcome};
use tabstash_core::notice::Notice;
use tabstash_core::store::KeyValueStore;

/// Positions shown to the user start at 1; position 0 has no index.
pub fn position_to_index(position: usize) -> Option<usize> {
    position.checked_sub(1)
}

pub async fn run_remove<S: KeyValueStore>(
    list: &ListController<S>,
    position: usize,
) -> Result<RemoveOutcome> {
    let outcome = match position_to_index(position) {
        Some(index) => list.remove_at(index).await?,
        None => RemoveOutcome::OutOfRange,
    };
    match &outcome {
        RemoveOutcome::Removed(url) => println!("{}: {url}", Notice::from(&outcome)),
        RemoveOutcome::OutOfRange => println!("{} ({position})", Notice::from(&outcome)),
    }
    Ok(outcome)
}

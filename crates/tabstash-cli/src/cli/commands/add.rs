//! `tabstash add <url>` – clean a URL and append it to the list.

use anyhow::Result;
use tabstash_core::list::{AddOutcome, ListController};
use tabstash_core::notice::Notice;
use tabstash_core::store::KeyValueStore;

pub async fn run_add<S: KeyValueStore>(list: &ListController<S>, url: &str) -> Result<AddOutcome> {
    let outcome = list.add(url).await?;
    match &outcome {
        AddOutcome::Added(cleaned) | AddOutcome::AlreadyPresent(cleaned) => {
            println!("{}: {cleaned}", Notice::from(&outcome));
        }
        AddOutcome::Rejected => println!("{}", Notice::from(&outcome)),
    }
    Ok(outcome)
}

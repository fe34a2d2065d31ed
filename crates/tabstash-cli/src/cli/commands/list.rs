//! `tabstash list [--html]` – show the collected URLs.

use anyhow::Result;
use tabstash_core::list::ListController;
use tabstash_core::render::{render_html, render_text};
use tabstash_core::store::KeyValueStore;

pub async fn run_list<S: KeyValueStore>(list: &ListController<S>, html: bool) -> Result<()> {
    let urls = list.load().await?;
    if html {
        print!("{}", render_html(&urls));
    } else {
        print!("{}", render_text(&urls));
    }
    Ok(())
}

//! `tabstash clear` – empty the list after a confirming Enter.
//!
//! The first request arms the confirmation window; pressing Enter before it
//! lapses is the second request. EOF or the window lapsing cancels.

use anyhow::Result;
use tabstash_core::confirm::{expiry, ClearConfirm, ClearRequest, CLEAR_CONFIRM_WINDOW};
use tabstash_core::list::ListController;
use tabstash_core::notice::Notice;
use tabstash_core::store::KeyValueStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub async fn run_clear<S, R>(list: &ListController<S>, input: R) -> Result<ClearRequest>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
{
    let mut confirm = ClearConfirm::new();
    let first = confirm.request(list).await?;
    if first != ClearRequest::ConfirmRequested {
        println!("{}", Notice::from(first));
        return Ok(first);
    }

    println!(
        "Press Enter within {} seconds to clear the list (Ctrl-D to cancel).",
        CLEAR_CONFIRM_WINDOW.as_secs()
    );
    let mut lines = input.lines();
    tokio::select! {
        line = lines.next_line() => {
            if line?.is_some() {
                let second = confirm.request(list).await?;
                println!("{}", Notice::from(second));
                return Ok(second);
            }
        }
        _ = expiry(confirm.deadline()) => {}
    }

    confirm.reset();
    tracing::debug!("clear not confirmed");
    println!("Clear cancelled");
    Ok(first)
}

//! Clipboard via the OSC 52 terminal escape sequence.
//! Works in most modern terminals (kitty, WezTerm, iTerm2, tmux with `set-clipboard on`).

use async_trait::async_trait;
use base64::Engine;
use tabstash_core::clipboard::{ClipboardError, ClipboardWriter};
use tokio::io::AsyncWriteExt;

pub struct Osc52Clipboard;

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", encoded)
}

#[async_trait]
impl ClipboardWriter for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(osc52_sequence(text).as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

//! `tabstash session` – a long-lived prompt that behaves like the popup:
//! the clear confirmation and the current notice live for the session only.

use anyhow::Result;
use std::io::Write;
use tabstash_core::clipboard::ClipboardWriter;
use tabstash_core::confirm::{expiry, ClearConfirm, ClearRequest, ConfirmState};
use tabstash_core::list::{AddOutcome, ListController, RemoveOutcome};
use tabstash_core::notice::{Notice, NoticeBoard, NoticeLevel};
use tabstash_core::render::{render_html, render_text};
use tabstash_core::store::KeyValueStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::commands::position_to_index;

const HELP: &str = "\
commands:
  add <url>      clean the URL and add it
  list           show the list
  html           show the list as HTML
  remove <n>     remove the URL at position n
  copy           copy all URLs to the clipboard
  clear          clear the list (repeat within 3 seconds to confirm)
  help           this text
  quit           leave the session
";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a, S, C: ?Sized, W> {
    list: &'a ListController<S>,
    clipboard: &'a C,
    out: W,
    confirm: ClearConfirm,
    notices: NoticeBoard,
}

impl<'a, S, C, W> Session<'a, S, C, W>
where
    S: KeyValueStore,
    C: ClipboardWriter + ?Sized,
    W: Write,
{
    pub fn new(list: &'a ListController<S>, clipboard: &'a C, out: W) -> Self {
        Self {
            list,
            clipboard,
            out,
            confirm: ClearConfirm::new(),
            notices: NoticeBoard::new(),
        }
    }

    /// Reads commands from `input` until `quit` or EOF.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();
        if let Err(err) = self.show_list().await {
            self.report(err)?;
        }

        loop {
            self.prompt()?;
            let deadline = self.confirm.deadline();
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match self.handle(line.trim()).await {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(err) => self.report(err)?,
                    }
                }
                _ = expiry(deadline) => {
                    self.confirm.expire_if_due();
                    writeln!(self.out)?;
                }
            }
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    async fn handle(&mut self, line: &str) -> Result<Flow> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "add" => {
                let outcome = self.list.add(arg).await?;
                self.notices.post(Notice::from(&outcome));
                if matches!(outcome, AddOutcome::Added(_)) {
                    self.show_list().await?;
                }
            }
            "list" | "ls" => self.show_list().await?,
            "html" => {
                let urls = self.list.load().await?;
                write!(self.out, "{}", render_html(&urls))?;
            }
            "remove" | "rm" => match arg.parse::<usize>() {
                Ok(position) => {
                    let outcome = match position_to_index(position) {
                        Some(index) => self.list.remove_at(index).await?,
                        None => RemoveOutcome::OutOfRange,
                    };
                    self.notices.post(Notice::from(&outcome));
                    if matches!(outcome, RemoveOutcome::Removed(_)) {
                        self.show_list().await?;
                    }
                }
                Err(_) => self.notices.post(Notice::info("Usage: remove <n>")),
            },
            "copy" => {
                let outcome = self.list.copy_all(self.clipboard).await?;
                self.notices.post(Notice::from(outcome));
            }
            "clear" => {
                let request = self.confirm.request(self.list).await?;
                self.notices.post(Notice::from(request));
                if matches!(request, ClearRequest::Cleared(_)) {
                    self.show_list().await?;
                }
            }
            "help" | "?" => write!(self.out, "{HELP}")?,
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            other => self
                .notices
                .post(Notice::info(format!("Unknown command: {other} (try help)"))),
        }
        Ok(Flow::Continue)
    }

    async fn show_list(&mut self) -> Result<()> {
        let urls = self.list.load().await?;
        write!(self.out, "{}", render_text(&urls))?;
        Ok(())
    }

    /// Failures never end the session; they become an error notice.
    fn report(&mut self, err: anyhow::Error) -> Result<()> {
        tracing::warn!("session command failed: {:#}", err);
        self.notices.post(Notice::error(format!("{err:#}")));
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if let Some(notice) = self.notices.current() {
            let tag = match notice.level {
                NoticeLevel::Info => "",
                NoticeLevel::Error => "error: ",
            };
            writeln!(self.out, "[{tag}{notice}]")?;
        }
        let marker = match self.confirm.state() {
            ConfirmState::Idle => "",
            ConfirmState::Confirming => " (clear again to confirm)",
        };
        write!(self.out, "tabstash{marker}> ")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use tabstash_core::clipboard::ClipboardError;
    use tabstash_core::store::MemoryStore;
    use tokio::io::AsyncWriteExt;

    #[derive(Default)]
    struct RecordingClipboard(Mutex<Vec<String>>);

    #[async_trait]
    impl ClipboardWriter for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    async fn run_script(list: &ListController<MemoryStore>, script: &str) -> (String, Vec<String>) {
        let clipboard = RecordingClipboard::default();
        let mut out = Vec::new();
        Session::new(list, &clipboard, &mut out)
            .run(script.as_bytes())
            .await
            .unwrap();
        let copied = clipboard.0.lock().unwrap().clone();
        (String::from_utf8(out).unwrap(), copied)
    }

    #[tokio::test(start_paused = true)]
    async fn add_copy_and_confirmed_clear() {
        let list = ListController::new(MemoryStore::new());
        let script = "\
add https://shop.example.com/item?id=5&utm_source=fb&ref=abc
add https://shop.example.com/item?id=5&fbclid=x
add about:blank
copy
clear
clear
quit
";
        let (out, copied) = run_script(&list, script).await;
        assert!(out.contains("1  https://shop.example.com/item?id=5"));
        assert!(out.contains("[Already in list]"));
        assert!(out.contains("[Cannot collect this page]"));
        assert!(out.contains("[Copied 1 URL]"));
        assert!(out.contains("(clear again to confirm)"));
        assert!(out.contains("[List cleared]"));
        assert_eq!(copied, vec!["https://shop.example.com/item?id=5".to_string()]);
        assert!(list.load().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn remove_by_position_and_bad_input() {
        let list = ListController::new(MemoryStore::with_record(
            "urls",
            &["https://a.example/", "https://b.example/"],
        ));
        let (out, _) = run_script(&list, "remove 1\nremove 9\nremove x\nfrobnicate\n").await;
        assert!(out.contains("[URL removed]"));
        assert!(out.contains("[No URL at that position]"));
        assert!(out.contains("[Usage: remove <n>]"));
        assert!(out.contains("[Unknown command: frobnicate (try help)]"));
        assert_eq!(
            list.load().await.unwrap(),
            vec!["https://b.example/".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn storage_failure_is_reported_and_session_continues() {
        let list = ListController::new(MemoryStore::new());
        list.store().fail_writes(true);
        let (out, _) = run_script(&list, "add https://a.example/\nlist\n").await;
        assert!(out.contains("[error: write rejected"));
        assert!(out.contains("No URLs collected yet."));
    }

    #[tokio::test(start_paused = true)]
    async fn confirmation_lapses_while_waiting_for_input() {
        let list = ListController::new(MemoryStore::with_record(
            "urls",
            &["https://a.example/", "https://b.example/", "https://c.example/"],
        ));
        let (mut writer, reader) = tokio::io::duplex(256);
        let clipboard = RecordingClipboard::default();
        let mut out = Vec::new();

        let driver = async {
            writer.write_all(b"clear\n").await.unwrap();
            tokio::time::sleep(Duration::from_secs(4)).await;
            writer.write_all(b"clear\nquit\n").await.unwrap();
        };
        let session = async {
            Session::new(&list, &clipboard, &mut out)
                .run(tokio::io::BufReader::new(reader))
                .await
                .unwrap();
        };
        tokio::join!(driver, session);

        // The second request came after the window and only re-armed it.
        assert_eq!(list.load().await.unwrap().len(), 3);
    }
}

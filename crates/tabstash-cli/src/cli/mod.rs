//! CLI for tabstash.

mod clipboard;
mod commands;
mod session;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tabstash_core::config;
use tabstash_core::store;
use tabstash_core::ListController;

use clipboard::Osc52Clipboard;
use commands::{run_add, run_clear, run_copy, run_list, run_remove};
use session::Session;

/// Top-level CLI for tabstash.
#[derive(Debug, Parser)]
#[command(name = "tabstash")]
#[command(about = "tabstash: collect page URLs without their tracking parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Clean a page URL and add it to the list.
    Add {
        /// URL of the page to collect.
        url: Option<String>,
    },

    /// Show the collected URLs.
    List {
        /// Print an HTML fragment instead of plain text.
        #[arg(long)]
        html: bool,
    },

    /// Remove one URL by its position as shown by `list`.
    Remove {
        /// 1-based position.
        position: usize,
    },

    /// Copy all URLs to the clipboard, one per line.
    Copy,

    /// Clear the list (asks for confirmation).
    Clear,

    /// Interactive session: one command per line until `quit` or EOF.
    Session,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            clap_complete::generate(shell, &mut Cli::command(), "tabstash", &mut std::io::stdout());
            return Ok(());
        }

        let cfg = config::load_or_init().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = store::open_configured(&cfg)
            .await
            .context("open URL store")?;
        let list = ListController::with_key(store, cfg.storage_key.clone());

        match cli.command {
            CliCommand::Add { url } => {
                run_add(&list, url.as_deref().unwrap_or_default()).await?;
            }
            CliCommand::List { html } => run_list(&list, html).await?,
            CliCommand::Remove { position } => {
                run_remove(&list, position).await?;
            }
            CliCommand::Copy => {
                run_copy(&list, &Osc52Clipboard).await?;
            }
            CliCommand::Clear => {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                run_clear(&list, stdin).await?;
            }
            CliCommand::Session => {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                Session::new(&list, &Osc52Clipboard, std::io::stdout())
                    .run(stdin)
                    .await?;
            }
            // Handled before the store is opened.
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

//! CLI entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotlist_core` linkage.
//! - Drive a note list from stdin through the line view (`repl`).

mod view;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jotlist_core::{default_log_level, init_logging, NoteStore, StoreConfig};
use log::info;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "jotlist", version, about = "Jotlist note list")]
struct Cli {
    /// Absolute directory for rolling log files. Logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print core ping and version (default).
    Ping,
    /// Read view commands from stdin and render after each one.
    Repl {
        /// Start without the sample note.
        #[arg(long)]
        empty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, log_dir).context("logging init failed")?;
    }

    match cli.command.unwrap_or(CliCommand::Ping) {
        CliCommand::Ping => {
            println!("jotlist_core ping={}", jotlist_core::ping());
            println!("jotlist_core version={}", jotlist_core::core_version());
        }
        CliCommand::Repl { empty } => {
            let config = if empty {
                StoreConfig::default()
            } else {
                StoreConfig::demo()
            };
            let mut store = NoteStore::with_config(config);
            info!("event=repl_start module=cli status=ok notes={}", store.len());
            let stdin = io::stdin();
            let stdout = io::stdout();
            view::run(&mut store, stdin.lock(), &mut stdout.lock())
                .context("terminal view failed")?;
        }
    }

    Ok(())
}

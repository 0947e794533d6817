//! CLI for page-analyzer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use page_analyzer_core::config;
use page_analyzer_core::store::UrlDb;
use std::path::PathBuf;

use commands::{run_add, run_completions, run_list, run_man, run_show};

/// Top-level CLI for page-analyzer.
#[derive(Debug, Parser)]
#[command(name = "page-analyzer")]
#[command(about = "Validate, normalize and store website URLs", long_about = None)]
pub struct Cli {
    /// Database file (overrides `database_path` from config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Submit a URL; it is stored as `scheme://host` unless already present.
    Add {
        /// URL to submit.
        url: String,
    },

    /// Show one stored URL by its ID.
    Show {
        /// URL identifier.
        id: i64,
    },

    /// List stored URLs, newest first.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page to stdout.
    Man,
}

impl Cli {
    /// Parse arguments and run the command. Returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell).map(|()| 0),
            CliCommand::Man => return run_man().map(|()| 0),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let db_path = match cli.db.or_else(|| cfg.database_path.clone()) {
            Some(path) => path,
            None => UrlDb::default_path()?,
        };
        let db = UrlDb::open_at(&db_path).await?;

        match cli.command {
            CliCommand::Add { url } => run_add(&db, &cfg.validator(), &url).await,
            CliCommand::Show { id } => run_show(&db, id).await.map(|()| 0),
            CliCommand::List { json } => run_list(&db, json).await.map(|()| 0),
            CliCommand::Completions { .. } | CliCommand::Man => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests;

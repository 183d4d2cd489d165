use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use zenlog_core::env_first_non_empty;

mod client;
mod commands;

/// Default address of the zenlog server, for both `serve` and the client commands.
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:37780";

#[derive(Parser)]
#[command(name = "zenlog")]
#[command(version, about = "A quiet journal that reflects back what you write", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Write a journal entry. Without --owner it is kept in the local journal.
    Write {
        text: String,
        #[arg(short, long)]
        owner: Option<String>,
        /// Do not wait for the entry's inner thought
        #[arg(long)]
        no_wait: bool,
        /// Give up waiting after this many seconds
        #[arg(long, default_value = "60")]
        max_wait: u64,
    },
    /// Start a new conversation and make it current
    New {
        #[arg(short, long)]
        owner: String,
        #[arg(short, long)]
        title: Option<String>,
    },
    /// Show the current conversation, or the local journal without --owner
    History {
        #[arg(short, long)]
        owner: Option<String>,
        /// Thought to show instead of the current one
        #[arg(short, long)]
        session: Option<String>,
    },
    /// Reflect on the current conversation, or on the local journal without --owner
    Insight {
        #[arg(short, long)]
        owner: Option<String>,
    },
    /// List your conversations, most recently active first
    Thoughts {
        #[arg(short, long)]
        owner: String,
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("zenlog")
}

fn get_db_path() -> PathBuf {
    env_first_non_empty(&["ZENLOG_DB_PATH"])
        .map_or_else(|| data_dir().join("journal.db"), PathBuf::from)
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn get_api_key() -> Result<String> {
    env_first_non_empty(&["ZENLOG_API_KEY", "OPENAI_API_KEY"]).ok_or_else(|| {
        anyhow::anyhow!("ZENLOG_API_KEY or OPENAI_API_KEY environment variable must be set")
    })
}

fn get_base_url() -> String {
    env_first_non_empty(&["ZENLOG_API_URL"])
        .unwrap_or_else(|| zenlog_llm::DEFAULT_BASE_URL.to_owned())
}

fn get_model() -> String {
    env_first_non_empty(&["ZENLOG_MODEL"]).unwrap_or_else(|| zenlog_llm::DEFAULT_MODEL.to_owned())
}

fn get_server_url() -> String {
    env_first_non_empty(&["ZENLOG_SERVER_URL"]).unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Write { text, owner, no_wait, max_wait } => {
            commands::write::run(text, owner, !no_wait, max_wait).await?;
        },
        Commands::New { owner, title } => commands::thoughts::run_new(owner, title).await?,
        Commands::History { owner, session } => commands::history::run(owner, session).await?,
        Commands::Insight { owner } => commands::insight::run(owner).await?,
        Commands::Thoughts { owner, limit } => commands::thoughts::run_list(owner, limit).await?,
    }

    Ok(())
}

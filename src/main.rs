//! discli
//!
//! Edit Discourse posts as local markdown files.
//!
//! # Commands
//!
//! - `init` - Store the server URL, username and API key
//! - `get` - Fetch a topic's first post into `<topic>-<slug>.md`
//! - `put` - Upload a fetched post if nobody edited it meanwhile

mod commands;
mod discourse;
mod error;
mod identity;
mod registry;
mod store;

use std::env;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::discourse::DiscourseClient;
use crate::error::{DiscliError, Result};
use crate::identity::Identity;
use crate::store::paths;

/// Sync Discourse posts with local files.
#[derive(Parser)]
#[command(name = "dh")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store credentials for a Discourse server
    Init {
        /// Base URL of the forum
        url: String,
        /// Username the API key belongs to
        username: String,
        /// API key
        api_key: String,
    },

    /// Fetch a topic's first post into the current directory
    Get {
        /// Topic id
        topic_id: u64,
    },

    /// Push a fetched post back to the server
    Put {
        /// Topic id or the filename written by `get`
        topic: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(e.kind()));
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Exit status for a failed parse: 0 for help/version output, 1 otherwise.
fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

async fn run(command: Commands) -> Result<()> {
    let identity_path = paths::identity_path().ok_or(DiscliError::NoConfigDir)?;

    match command {
        Commands::Init {
            url,
            username,
            api_key,
        } => {
            let identity = commands::init(&identity_path, &url, &username, &api_key)?;
            println!("Saved identity to {}", identity_path.display());
            println!("{identity}");
        }
        Commands::Get { topic_id } => {
            let client = DiscourseClient::new(&Identity::load(&identity_path)?)?;
            let dir = env::current_dir()?;
            let path = commands::get(&client, &dir, topic_id).await?;
            println!("{}", path.display());
        }
        Commands::Put { topic } => {
            let client = DiscourseClient::new(&Identity::load(&identity_path)?)?;
            let dir = env::current_dir()?;
            let post_id = commands::put(&client, &dir, &topic).await?;
            println!("Updated post {post_id}");
        }
    }

    Ok(())
}

// Error types for discli.
// Covers local state files, the Discourse API, and edit conflicts.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscliError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Discourse API error: HTTP {status} from {url}")]
    Remote { status: StatusCode, url: String },

    #[error("Topic {topic_id} has no posts")]
    EmptyPostStream { topic_id: u64 },

    #[error(
        "Topic {topic_id} was modified remotely (local {local}, remote {remote}), aborting"
    )]
    Conflict {
        topic_id: u64,
        local: String,
        remote: String,
    },

    #[error("{0} is neither a topic id nor a known filename")]
    NotFound(String),

    #[error("Topic {0} is not tracked in the registry")]
    MissingEntry(u64),

    #[error("No identity at {}, run `dh init` first", .path.display())]
    MissingIdentity { path: PathBuf },

    #[error("Could not determine a per-user config directory")]
    NoConfigDir,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DiscliError>;

// Identity management.
// Stores the Discourse server URL, username, and API key for every run.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiscliError, Result};
use crate::store::{read_json, write_private_json};

/// Credentials and server used to authenticate remote calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub url: String,
    pub username: String,
    #[serde(rename = "api-key")]
    pub api_key: String,
}

impl Identity {
    pub fn new(url: &str, username: &str, api_key: &str) -> Self {
        Self {
            url: url.to_string(),
            username: username.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Server URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        let visible = chars.len().min(4);
        let hidden = chars.len() - visible;
        let tail: String = chars[hidden..].iter().collect();
        format!("{}{}", "*".repeat(hidden), tail)
    }

    /// Persist to `path`, replacing whatever was there.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_private_json(path, self)?;
        tracing::debug!(path = %path.display(), "identity saved");
        Ok(())
    }

    /// Load from `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)?.ok_or_else(|| DiscliError::MissingIdentity {
            path: path.to_path_buf(),
        })
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "url:      {}", self.url)?;
        writeln!(f, "username: {}", self.username)?;
        write!(f, "api-key:  {}", self.masked_key())
    }
}

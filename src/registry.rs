// Topic registry.
// Maps topic ids to the post being edited locally, persisted in `.discli`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DiscliError, Result};
use crate::store::{paths, read_json, write_json};

/// Metadata kept for a fetched topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMeta {
    /// Remote post id of the topic's first post.
    pub id: u64,
    pub slug: String,
    /// Local file holding the post's raw content.
    pub filename: String,
    /// Remote `updated_at` when fetched. Compared for equality only.
    pub updated_at: String,
}

/// Topic id to metadata mapping.
pub type TopicMap = BTreeMap<u64, TopicMeta>;

/// Handle to a registry file. Every mutation reads and rewrites the whole file.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Registry stored in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(paths::registry_path(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the mapping. A missing file is an empty registry.
    pub fn load(&self) -> Result<TopicMap> {
        Ok(read_json(self.path())?.unwrap_or_default())
    }

    /// Overwrite the file with `topics`.
    pub fn save(&self, topics: &TopicMap) -> Result<()> {
        write_json(self.path(), topics)?;
        tracing::debug!(path = %self.path.display(), entries = topics.len(), "registry saved");
        Ok(())
    }

    /// Insert or replace the entry for `topic_id`.
    pub fn upsert(&self, topic_id: u64, meta: TopicMeta) -> Result<()> {
        let mut topics = self.load()?;
        topics.insert(topic_id, meta);
        self.save(&topics)
    }

    /// Remove the entry for `topic_id`, which must exist.
    pub fn remove(&self, topic_id: u64) -> Result<TopicMeta> {
        let mut topics = self.load()?;
        let meta = topics
            .remove(&topic_id)
            .ok_or(DiscliError::MissingEntry(topic_id))?;
        self.save(&topics)?;
        Ok(meta)
    }

    /// Find an entry by topic id, falling back to an exact filename match.
    ///
    /// With duplicate filenames the lowest topic id wins.
    pub fn resolve(&self, key: &str) -> Result<(u64, TopicMeta)> {
        let topics = self.load()?;
        resolve_in(&topics, key)
            .map(|(id, meta)| (id, meta.clone()))
            .ok_or_else(|| DiscliError::NotFound(key.to_string()))
    }
}

fn resolve_in<'a>(topics: &'a TopicMap, key: &str) -> Option<(u64, &'a TopicMeta)> {
    key.parse::<u64>()
        .ok()
        .and_then(|id| topics.get_key_value(&id))
        .or_else(|| topics.iter().find(|(_, meta)| meta.filename == key))
        .map(|(id, meta)| (*id, meta))
}

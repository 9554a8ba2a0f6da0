// Command operations.
// `init` stores credentials, `get` checks a post out to a file, `put` pushes it back.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::discourse::PostApi;
use crate::error::{DiscliError, Result};
use crate::identity::Identity;
use crate::registry::{Registry, TopicMeta};
use crate::store::paths;

/// Store a new identity at `path`, replacing any previous one.
pub fn init(path: &Path, url: &str, username: &str, api_key: &str) -> Result<Identity> {
    let identity = Identity::new(url, username, api_key);
    identity.save(path)?;
    Ok(identity)
}

/// Fetch the first post of `topic_id` into `<topic_id>-<slug>.md` under `dir`.
///
/// The registry entry is written before the post file.
pub async fn get<A: PostApi>(api: &A, dir: &Path, topic_id: u64) -> Result<PathBuf> {
    let post_id = api.first_post_id(topic_id).await?;
    let post = api.fetch_post(post_id).await?;

    let filename = paths::post_filename(topic_id, &post.topic_slug);
    let meta = TopicMeta {
        id: post.id,
        slug: post.topic_slug,
        filename: filename.clone(),
        updated_at: post.updated_at,
    };
    Registry::in_dir(dir).upsert(topic_id, meta)?;

    let path = dir.join(&filename);
    fs::write(&path, with_trailing_newline(&post.raw))?;

    info!(topic_id, post_id, file = %filename, "fetched post");
    Ok(path)
}

/// `raw` ending in exactly one newline.
fn with_trailing_newline(raw: &str) -> String {
    let mut content = raw.trim_end_matches('\n').to_string();
    content.push('\n');
    content
}

/// Upload the local copy of a topic and stop tracking it.
///
/// `key` is a topic id or a tracked filename. Aborts without touching anything
/// if the post changed on the server since it was fetched.
pub async fn put<A: PostApi>(api: &A, dir: &Path, key: &str) -> Result<u64> {
    let registry = Registry::in_dir(dir);
    let (topic_id, local) = registry.resolve(key)?;

    let remote = api.fetch_post(local.id).await?;
    if remote.updated_at != local.updated_at {
        warn!(
            topic_id,
            local = %local.updated_at,
            remote = %remote.updated_at,
            "post changed on server"
        );
        return Err(DiscliError::Conflict {
            topic_id,
            local: local.updated_at,
            remote: remote.updated_at,
        });
    }

    let path = dir.join(&local.filename);
    let content = fs::read_to_string(&path)?;
    api.update_post(local.id, &content).await?;

    registry.remove(topic_id)?;
    fs::remove_file(&path)?;

    info!(topic_id, post_id = local.id, file = %local.filename, "updated post");
    Ok(local.id)
}

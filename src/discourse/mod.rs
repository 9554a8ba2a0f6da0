// Discourse API module.
// Provides the client, response types, and the post operations commands rely on.

pub mod client;
pub mod endpoints;
pub mod types;

#[cfg(test)]
mod canned;

pub use client::DiscourseClient;
pub use types::Post;

use crate::error::Result;

/// Remote post operations used by the `get` and `put` commands.
pub trait PostApi {
    /// Id of the first post in a topic.
    async fn first_post_id(&self, topic_id: u64) -> Result<u64>;

    /// Fetch a post including its raw markdown.
    async fn fetch_post(&self, post_id: u64) -> Result<Post>;

    /// Replace a post's raw markdown.
    async fn update_post(&self, post_id: u64, raw: &str) -> Result<()>;
}

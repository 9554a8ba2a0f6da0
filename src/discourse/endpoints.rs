// Discourse API endpoint functions.
// Typed wrappers for the topic and post endpoints.

use crate::error::{DiscliError, Result};

use super::PostApi;
use super::client::DiscourseClient;
use super::types::{Post, TopicDetail};

impl DiscourseClient {
    /// Get a topic with its first page of posts.
    pub async fn get_topic(&self, topic_id: u64) -> Result<TopicDetail> {
        let response = self.get(&format!("/t/{}.json", topic_id)).await?;
        let topic: TopicDetail = response.json().await?;
        Ok(topic)
    }

    /// Get a single post.
    pub async fn get_post(&self, post_id: u64) -> Result<Post> {
        let response = self.get(&format!("/posts/{}.json", post_id)).await?;
        let post: Post = response.json().await?;
        Ok(post)
    }

    /// Replace the raw content of a post.
    pub async fn put_post_raw(&self, post_id: u64, raw: &str) -> Result<()> {
        self.put_form(&format!("/posts/{}.json", post_id), &[("post[raw]", raw)])
            .await?;
        Ok(())
    }
}

impl PostApi for DiscourseClient {
    async fn first_post_id(&self, topic_id: u64) -> Result<u64> {
        let topic = self.get_topic(topic_id).await?;
        topic
            .post_stream
            .posts
            .first()
            .map(|post| post.id)
            .ok_or(DiscliError::EmptyPostStream { topic_id })
    }

    async fn fetch_post(&self, post_id: u64) -> Result<Post> {
        self.get_post(post_id).await
    }

    async fn update_post(&self, post_id: u64, raw: &str) -> Result<()> {
        self.put_post_raw(post_id, raw).await
    }
}

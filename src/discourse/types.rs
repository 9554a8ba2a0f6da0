// Discourse API response types.
// Only the fields discli reads are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};

/// Topic detail from `GET /t/{id}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicDetail {
    pub post_stream: PostStream,
}

/// Posts loaded with a topic.
#[derive(Debug, Clone, Deserialize)]
pub struct PostStream {
    pub posts: Vec<PostSummary>,
}

/// Post entry inside a topic's post stream.
#[derive(Debug, Clone, Deserialize)]
pub struct PostSummary {
    pub id: u64,
}

/// Post from `GET /posts/{id}.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub topic_slug: String,
    /// Kept verbatim; never parsed or reformatted.
    pub updated_at: String,
    pub raw: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_detail_first_post() {
        let json = r#"{
            "id": 42,
            "title": "Hello world",
            "post_stream": {
                "posts": [
                    {"id": 7, "post_number": 1, "username": "alice"},
                    {"id": 8, "post_number": 2, "username": "bob"}
                ],
                "stream": [7, 8]
            }
        }"#;

        let topic: TopicDetail = serde_json::from_str(json).unwrap();
        assert_eq!(topic.post_stream.posts.first().map(|p| p.id), Some(7));
    }

    #[test]
    fn test_post() {
        let json = r#"{
            "id": 7,
            "topic_id": 42,
            "topic_slug": "hello-world",
            "updated_at": "2024-01-01T00:00:00.000Z",
            "raw": "Hi",
            "cooked": "<p>Hi</p>"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.topic_slug, "hello-world");
        assert_eq!(post.updated_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(post.raw, "Hi");
    }
}

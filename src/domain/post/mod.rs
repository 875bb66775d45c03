//! Post domain — posts, their aggregates and reports.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::community::Community;
use crate::domain::person::Person;
use crate::shared::{impl_lemmy_object, impl_published};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub creator_id: i32,
    pub community_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub ap_id: String,
    pub local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_community: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_local: Option<bool>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostAggregates {
    pub id: i32,
    pub post_id: i32,
    pub comments: i64,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_comment_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_comment_time_necro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_community: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_local: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_rank: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_rank_active: Option<i64>,
}

/// A post with its author, community and the caller's relation to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostView {
    pub post: Post,
    pub creator: Person,
    pub community: Community,
    pub counts: PostAggregates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_banned_from_community: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_vote: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_comments: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostReport {
    pub id: i32,
    pub creator_id: i32,
    pub post_id: i32,
    pub original_post_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_post_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_post_body: Option<String>,
    pub reason: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver_id: Option<i32>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostReportView {
    pub post_report: PostReport,
    pub post: Post,
    pub community: Community,
    pub creator: Person,
    pub post_creator: Person,
    pub counts: PostAggregates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_banned_from_community: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_vote: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver: Option<Person>,
}

impl_lemmy_object!(Post, PostAggregates, PostReport);
impl_published!(Post, PostReport);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::shared::{LemmyObject, Published};

    #[test]
    fn test_post_view_from_payload() {
        let view: PostView = serde_json::from_value(fixtures::post_view_json(1)).unwrap();
        assert_eq!(view.post.id_b64(), "AQ");
        assert_eq!(view.community.name, "anime");
        assert!(view.post.published_at().is_some());
        assert!(view.my_vote.is_none());
    }

    #[test]
    fn test_post_view_reserializes_to_subset() {
        let envelope = fixtures::post_view_json(2);
        let view: PostView = serde_json::from_value(envelope.clone()).unwrap();
        let back = serde_json::to_value(&view).unwrap();
        fixtures::assert_subset(&back, &envelope);
    }
}

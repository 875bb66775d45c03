//! Comment domain — comments, their aggregates and reports.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::community::Community;
use crate::domain::person::Person;
use crate::domain::post::Post;
use crate::shared::{impl_lemmy_object, impl_published};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub creator_id: i32,
    pub post_id: i32,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    pub ap_id: String,
    pub local: bool,
    /// Materialized path of ids from the root, e.g. `0.12.345`.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinguished: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i32>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Comment {
    /// Id of the parent comment, `None` for top-level comments.
    pub fn parent_id(&self) -> Option<i32> {
        let mut ids = self.path.rsplit('.').skip(1);
        ids.next()?.parse().ok().filter(|id| *id != 0)
    }

    /// Nesting depth; top-level comments are at depth 0.
    pub fn depth(&self) -> usize {
        self.path.matches('.').count().saturating_sub(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentAggregates {
    pub id: i32,
    pub comment_id: i32,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_rank: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    pub counts: CommentAggregates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_banned_from_community: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_vote: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentReport {
    pub id: i32,
    pub creator_id: i32,
    pub comment_id: i32,
    pub original_comment_text: String,
    pub reason: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver_id: Option<i32>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentReportView {
    pub comment_report: CommentReport,
    pub comment: Comment,
    pub post: Post,
    pub community: Community,
    pub creator: Person,
    pub comment_creator: Person,
    pub counts: CommentAggregates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_banned_from_community: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_vote: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver: Option<Person>,
}

impl_lemmy_object!(Comment, CommentAggregates, CommentReport);
impl_published!(Comment, CommentReport);

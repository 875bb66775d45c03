//! Wire types for post requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::community::{CommunityModeratorView, CommunityView};
use crate::domain::post::{PostReportView, PostView};
use crate::shared::{ListingType, PostFeatureType, SortType};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Fetch a post by its id, or the post a comment belongs to.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPost {
    pub id: Option<i32>,
    pub comment_id: Option<i32>,
}

impl GetPost {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            comment_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPosts {
    pub type_: Option<ListingType>,
    pub sort: Option<SortType>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub community_id: Option<i32>,
    pub community_name: Option<String>,
    pub saved_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePost {
    pub name: String,
    pub community_id: i32,
    pub url: Option<String>,
    pub body: Option<String>,
    /// Must stay empty; bots fill it.
    pub honeypot: Option<String>,
    pub nsfw: Option<bool>,
    pub language_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditPost {
    pub post_id: i32,
    pub name: Option<String>,
    pub url: Option<String>,
    pub body: Option<String>,
    pub nsfw: Option<bool>,
    pub language_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletePost {
    pub post_id: i32,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RemovePost {
    pub post_id: i32,
    pub removed: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LockPost {
    pub post_id: i32,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturePost {
    pub post_id: i32,
    pub featured: bool,
    pub feature_type: PostFeatureType,
}

/// `score` is 1 (upvote), -1 (downvote) or 0 (clear).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePostLike {
    pub post_id: i32,
    pub score: i16,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SavePost {
    pub post_id: i32,
    pub save: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkPostAsRead {
    pub post_id: i32,
    pub read: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePostReport {
    pub post_id: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPostReports {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub unresolved_only: Option<bool>,
    pub community_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvePostReport {
    pub report_id: i32,
    pub resolved: bool,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostResponse {
    pub post_view: PostView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetPostResponse {
    pub post_view: PostView,
    pub community_view: CommunityView,
    pub moderators: Vec<CommunityModeratorView>,
    pub cross_posts: Vec<PostView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetPostsResponse {
    pub posts: Vec<PostView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostReportResponse {
    pub post_report_view: PostReportView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListPostReportsResponse {
    pub post_reports: Vec<PostReportView>,
}

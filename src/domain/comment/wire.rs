//! Wire types for comment requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::comment::{CommentReportView, CommentView};
use crate::domain::person::CommentReplyView;
use crate::shared::{CommentSortType, ListingType};

// ─── Requests ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetComment {
    pub id: i32,
}

/// List comments of a post, a community or a subtree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetComments {
    pub type_: Option<ListingType>,
    pub sort: Option<CommentSortType>,
    pub max_depth: Option<i32>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub community_id: Option<i32>,
    pub community_name: Option<String>,
    pub post_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub saved_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateComment {
    pub content: String,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub language_id: Option<i32>,
    /// Client-chosen id echoed back in the response.
    pub form_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditComment {
    pub comment_id: i32,
    pub content: Option<String>,
    pub language_id: Option<i32>,
    pub form_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteComment {
    pub comment_id: i32,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoveComment {
    pub comment_id: i32,
    pub removed: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DistinguishComment {
    pub comment_id: i32,
    pub distinguished: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommentLike {
    pub comment_id: i32,
    pub score: i16,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SaveComment {
    pub comment_id: i32,
    pub save: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkCommentReplyAsRead {
    pub comment_reply_id: i32,
    pub read: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommentReport {
    pub comment_id: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCommentReports {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub unresolved_only: Option<bool>,
    pub community_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveCommentReport {
    pub report_id: i32,
    pub resolved: bool,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentResponse {
    pub comment_view: CommentView,
    /// Local users notified by this comment.
    pub recipient_ids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetCommentsResponse {
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentReplyResponse {
    pub comment_reply_view: CommentReplyView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentReportResponse {
    pub comment_report_view: CommentReportView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListCommentReportsResponse {
    pub comment_reports: Vec<CommentReportView>,
}

//! Comments sub-client.

use crate::client::LemmyClient;
use crate::domain::comment::wire::{
    CommentReplyResponse, CommentReportResponse, CommentResponse, CreateComment,
    CreateCommentLike, CreateCommentReport, DeleteComment, DistinguishComment, EditComment,
    GetComment, GetComments, GetCommentsResponse, ListCommentReports, ListCommentReportsResponse,
    MarkCommentReplyAsRead, RemoveComment, ResolveCommentReport, SaveComment,
};
use crate::endpoints;
use crate::error::LemmyResult;

/// Sub-client for comment operations.
pub struct Comments<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Comments<'a> {
    pub async fn get(&self, id: i32) -> LemmyResult<CommentResponse> {
        self.client
            .http
            .request(&endpoints::GET_COMMENT, &GetComment { id })
            .await
    }

    pub async fn list(&self, form: &GetComments) -> LemmyResult<GetCommentsResponse> {
        self.client.http.request(&endpoints::GET_COMMENTS, form).await
    }

    pub async fn create(&self, form: &CreateComment) -> LemmyResult<CommentResponse> {
        self.client.http.request(&endpoints::CREATE_COMMENT, form).await
    }

    pub async fn edit(&self, form: &EditComment) -> LemmyResult<CommentResponse> {
        self.client.http.request(&endpoints::EDIT_COMMENT, form).await
    }

    pub async fn delete(&self, comment_id: i32, deleted: bool) -> LemmyResult<CommentResponse> {
        let form = DeleteComment {
            comment_id,
            deleted,
        };
        self.client.http.request(&endpoints::DELETE_COMMENT, &form).await
    }

    pub async fn remove(
        &self,
        comment_id: i32,
        removed: bool,
        reason: Option<&str>,
    ) -> LemmyResult<CommentResponse> {
        let form = RemoveComment {
            comment_id,
            removed,
            reason: reason.map(str::to_owned),
        };
        self.client.http.request(&endpoints::REMOVE_COMMENT, &form).await
    }

    /// Mark a moderator comment as speaking for the community.
    pub async fn distinguish(
        &self,
        comment_id: i32,
        distinguished: bool,
    ) -> LemmyResult<CommentResponse> {
        let form = DistinguishComment {
            comment_id,
            distinguished,
        };
        self.client.http.request(&endpoints::DISTINGUISH_COMMENT, &form).await
    }

    pub async fn like(&self, comment_id: i32, score: i16) -> LemmyResult<CommentResponse> {
        let form = CreateCommentLike { comment_id, score };
        self.client.http.request(&endpoints::LIKE_COMMENT, &form).await
    }

    pub async fn save(&self, comment_id: i32, save: bool) -> LemmyResult<CommentResponse> {
        let form = SaveComment { comment_id, save };
        self.client.http.request(&endpoints::SAVE_COMMENT, &form).await
    }

    pub async fn mark_reply_as_read(
        &self,
        comment_reply_id: i32,
        read: bool,
    ) -> LemmyResult<CommentReplyResponse> {
        let form = MarkCommentReplyAsRead {
            comment_reply_id,
            read,
        };
        self.client
            .http
            .request(&endpoints::MARK_COMMENT_REPLY_AS_READ, &form)
            .await
    }

    pub async fn report(&self, comment_id: i32, reason: &str) -> LemmyResult<CommentReportResponse> {
        let form = CreateCommentReport {
            comment_id,
            reason: reason.to_string(),
        };
        self.client.http.request(&endpoints::CREATE_COMMENT_REPORT, &form).await
    }

    pub async fn list_reports(
        &self,
        form: &ListCommentReports,
    ) -> LemmyResult<ListCommentReportsResponse> {
        self.client.http.request(&endpoints::LIST_COMMENT_REPORTS, form).await
    }

    pub async fn resolve_report(
        &self,
        report_id: i32,
        resolved: bool,
    ) -> LemmyResult<CommentReportResponse> {
        let form = ResolveCommentReport {
            report_id,
            resolved,
        };
        self.client.http.request(&endpoints::RESOLVE_COMMENT_REPORT, &form).await
    }
}

//! Posts sub-client — listing, authoring, moderation, votes and reports.

use crate::client::LemmyClient;
use crate::domain::post::wire::{
    CreatePost, CreatePostLike, CreatePostReport, DeletePost, EditPost, FeaturePost, GetPost,
    GetPostResponse, GetPosts, GetPostsResponse, ListPostReports, ListPostReportsResponse,
    LockPost, MarkPostAsRead, PostReportResponse, PostResponse, RemovePost, ResolvePostReport,
    SavePost,
};
use crate::endpoints;
use crate::error::LemmyResult;
use crate::shared::PostFeatureType;

/// Sub-client for post operations.
pub struct Posts<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Posts<'a> {
    pub async fn get(&self, form: &GetPost) -> LemmyResult<GetPostResponse> {
        self.client.http.request(&endpoints::GET_POST, form).await
    }

    pub async fn list(&self, form: &GetPosts) -> LemmyResult<GetPostsResponse> {
        self.client.http.request(&endpoints::GET_POSTS, form).await
    }

    pub async fn create(&self, form: &CreatePost) -> LemmyResult<PostResponse> {
        self.client.http.request(&endpoints::CREATE_POST, form).await
    }

    pub async fn edit(&self, form: &EditPost) -> LemmyResult<PostResponse> {
        self.client.http.request(&endpoints::EDIT_POST, form).await
    }

    pub async fn delete(&self, post_id: i32, deleted: bool) -> LemmyResult<PostResponse> {
        let form = DeletePost { post_id, deleted };
        self.client.http.request(&endpoints::DELETE_POST, &form).await
    }

    /// Moderator removal.
    pub async fn remove(
        &self,
        post_id: i32,
        removed: bool,
        reason: Option<&str>,
    ) -> LemmyResult<PostResponse> {
        let form = RemovePost {
            post_id,
            removed,
            reason: reason.map(str::to_owned),
        };
        self.client.http.request(&endpoints::REMOVE_POST, &form).await
    }

    pub async fn lock(&self, post_id: i32, locked: bool) -> LemmyResult<PostResponse> {
        let form = LockPost { post_id, locked };
        self.client.http.request(&endpoints::LOCK_POST, &form).await
    }

    /// Pin or unpin, in the community or instance-wide.
    pub async fn feature(
        &self,
        post_id: i32,
        featured: bool,
        feature_type: PostFeatureType,
    ) -> LemmyResult<PostResponse> {
        let form = FeaturePost {
            post_id,
            featured,
            feature_type,
        };
        self.client.http.request(&endpoints::FEATURE_POST, &form).await
    }

    pub async fn like(&self, post_id: i32, score: i16) -> LemmyResult<PostResponse> {
        let form = CreatePostLike { post_id, score };
        self.client.http.request(&endpoints::LIKE_POST, &form).await
    }

    pub async fn save(&self, post_id: i32, save: bool) -> LemmyResult<PostResponse> {
        let form = SavePost { post_id, save };
        self.client.http.request(&endpoints::SAVE_POST, &form).await
    }

    pub async fn mark_as_read(&self, post_id: i32, read: bool) -> LemmyResult<PostResponse> {
        let form = MarkPostAsRead { post_id, read };
        self.client.http.request(&endpoints::MARK_POST_AS_READ, &form).await
    }

    pub async fn report(&self, post_id: i32, reason: &str) -> LemmyResult<PostReportResponse> {
        let form = CreatePostReport {
            post_id,
            reason: reason.to_string(),
        };
        self.client.http.request(&endpoints::CREATE_POST_REPORT, &form).await
    }

    pub async fn list_reports(&self, form: &ListPostReports) -> LemmyResult<ListPostReportsResponse> {
        self.client.http.request(&endpoints::LIST_POST_REPORTS, form).await
    }

    pub async fn resolve_report(
        &self,
        report_id: i32,
        resolved: bool,
    ) -> LemmyResult<PostReportResponse> {
        let form = ResolvePostReport {
            report_id,
            resolved,
        };
        self.client.http.request(&endpoints::RESOLVE_POST_REPORT, &form).await
    }
}

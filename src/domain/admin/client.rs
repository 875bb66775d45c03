//! Admin sub-client — admin grants, purges and registration review.

use crate::client::LemmyClient;
use crate::domain::admin::wire::{
    AddAdmin, AddAdminResponse, ApproveRegistrationApplication,
    GetUnreadRegistrationApplicationCountResponse, ListRegistrationApplications,
    ListRegistrationApplicationsResponse, PurgeComment, PurgeCommunity, PurgeItemResponse,
    PurgePerson, PurgePost, RegistrationApplicationResponse,
};
use crate::endpoints;
use crate::error::LemmyResult;

/// Sub-client for admin operations. Every call requires an admin credential.
pub struct Admin<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Admin<'a> {
    pub async fn add_admin(&self, person_id: i32, added: bool) -> LemmyResult<AddAdminResponse> {
        let form = AddAdmin { person_id, added };
        self.client.http.request(&endpoints::ADD_ADMIN, &form).await
    }

    /// Permanently delete a person and all their content.
    pub async fn purge_person(
        &self,
        person_id: i32,
        reason: Option<&str>,
    ) -> LemmyResult<PurgeItemResponse> {
        let form = PurgePerson {
            person_id,
            reason: reason.map(str::to_string),
        };
        self.client.http.request(&endpoints::PURGE_PERSON, &form).await
    }

    pub async fn purge_community(
        &self,
        community_id: i32,
        reason: Option<&str>,
    ) -> LemmyResult<PurgeItemResponse> {
        let form = PurgeCommunity {
            community_id,
            reason: reason.map(str::to_string),
        };
        self.client.http.request(&endpoints::PURGE_COMMUNITY, &form).await
    }

    pub async fn purge_post(
        &self,
        post_id: i32,
        reason: Option<&str>,
    ) -> LemmyResult<PurgeItemResponse> {
        let form = PurgePost {
            post_id,
            reason: reason.map(str::to_string),
        };
        self.client.http.request(&endpoints::PURGE_POST, &form).await
    }

    pub async fn purge_comment(
        &self,
        comment_id: i32,
        reason: Option<&str>,
    ) -> LemmyResult<PurgeItemResponse> {
        let form = PurgeComment {
            comment_id,
            reason: reason.map(str::to_string),
        };
        self.client.http.request(&endpoints::PURGE_COMMENT, &form).await
    }

    pub async fn list_registration_applications(
        &self,
        form: &ListRegistrationApplications,
    ) -> LemmyResult<ListRegistrationApplicationsResponse> {
        self.client
            .http
            .request(&endpoints::LIST_REGISTRATION_APPLICATIONS, form)
            .await
    }

    pub async fn approve_registration_application(
        &self,
        form: &ApproveRegistrationApplication,
    ) -> LemmyResult<RegistrationApplicationResponse> {
        self.client
            .http
            .request(&endpoints::APPROVE_REGISTRATION_APPLICATION, form)
            .await
    }

    pub async fn unread_registration_application_count(
        &self,
    ) -> LemmyResult<GetUnreadRegistrationApplicationCountResponse> {
        self.client
            .http
            .request(&endpoints::GET_UNREAD_REGISTRATION_APPLICATION_COUNT, &())
            .await
    }
}

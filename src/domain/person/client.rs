//! Persons sub-client — profiles, inbox, blocks, bans and account settings.

use crate::auth::LoginResponse;
use crate::client::LemmyClient;
use crate::domain::person::wire::{
    BanPerson, BanPersonResponse, BannedPersonsResponse, BlockPerson, BlockPersonResponse,
    GetPersonDetails, GetPersonDetailsResponse, GetPersonMentions, GetPersonMentionsResponse,
    GetReplies, GetRepliesResponse, GetReportCount, GetReportCountResponse,
    GetUnreadCountResponse, MarkPersonMentionAsRead, PersonMentionResponse, SaveUserSettings,
};
use crate::endpoints;
use crate::error::LemmyResult;

/// Sub-client for person operations.
pub struct Persons<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Persons<'a> {
    pub async fn details(&self, form: &GetPersonDetails) -> LemmyResult<GetPersonDetailsResponse> {
        self.client.http.request(&endpoints::GET_PERSON_DETAILS, form).await
    }

    pub async fn mentions(
        &self,
        form: &GetPersonMentions,
    ) -> LemmyResult<GetPersonMentionsResponse> {
        self.client.http.request(&endpoints::GET_PERSON_MENTIONS, form).await
    }

    pub async fn mark_mention_as_read(
        &self,
        person_mention_id: i32,
        read: bool,
    ) -> LemmyResult<PersonMentionResponse> {
        let form = MarkPersonMentionAsRead {
            person_mention_id,
            read,
        };
        self.client
            .http
            .request(&endpoints::MARK_PERSON_MENTION_AS_READ, &form)
            .await
    }

    pub async fn replies(&self, form: &GetReplies) -> LemmyResult<GetRepliesResponse> {
        self.client.http.request(&endpoints::GET_REPLIES, form).await
    }

    /// Mark every reply, mention and private message as read.
    pub async fn mark_all_as_read(&self) -> LemmyResult<GetRepliesResponse> {
        self.client.http.request(&endpoints::MARK_ALL_AS_READ, &()).await
    }

    pub async fn unread_count(&self) -> LemmyResult<GetUnreadCountResponse> {
        self.client.http.request(&endpoints::GET_UNREAD_COUNT, &()).await
    }

    /// Open reports visible to the caller, optionally for one community.
    pub async fn report_count(&self, community_id: Option<i32>) -> LemmyResult<GetReportCountResponse> {
        let form = GetReportCount { community_id };
        self.client.http.request(&endpoints::GET_REPORT_COUNT, &form).await
    }

    pub async fn block(&self, person_id: i32, block: bool) -> LemmyResult<BlockPersonResponse> {
        let form = BlockPerson { person_id, block };
        self.client.http.request(&endpoints::BLOCK_PERSON, &form).await
    }

    /// Instance-wide ban. Admin only.
    pub async fn ban(&self, form: &BanPerson) -> LemmyResult<BanPersonResponse> {
        self.client.http.request(&endpoints::BAN_PERSON, form).await
    }

    pub async fn banned_persons(&self) -> LemmyResult<BannedPersonsResponse> {
        self.client.http.request(&endpoints::GET_BANNED_PERSONS, &()).await
    }

    pub async fn save_settings(&self, form: &SaveUserSettings) -> LemmyResult<LoginResponse> {
        self.client.http.request(&endpoints::SAVE_USER_SETTINGS, form).await
    }
}

//! Communities sub-client — lookup, listing, moderation and membership.

use crate::client::LemmyClient;
use crate::domain::community::wire::{
    AddModToCommunity, AddModToCommunityResponse, BanFromCommunity, BanFromCommunityResponse,
    BlockCommunity, BlockCommunityResponse, CommunityResponse, CreateCommunity, DeleteCommunity,
    EditCommunity, FollowCommunity, GetCommunity, GetCommunityResponse, ListCommunities,
    ListCommunitiesResponse, RemoveCommunity, TransferCommunity,
};
use crate::endpoints;
use crate::error::LemmyResult;

/// Sub-client for community operations.
pub struct Communities<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Communities<'a> {
    pub async fn get(&self, form: &GetCommunity) -> LemmyResult<GetCommunityResponse> {
        self.client.http.request(&endpoints::GET_COMMUNITY, form).await
    }

    pub async fn list(&self, form: &ListCommunities) -> LemmyResult<ListCommunitiesResponse> {
        self.client.http.request(&endpoints::LIST_COMMUNITIES, form).await
    }

    pub async fn create(&self, form: &CreateCommunity) -> LemmyResult<CommunityResponse> {
        self.client.http.request(&endpoints::CREATE_COMMUNITY, form).await
    }

    pub async fn edit(&self, form: &EditCommunity) -> LemmyResult<CommunityResponse> {
        self.client.http.request(&endpoints::EDIT_COMMUNITY, form).await
    }

    /// Delete (or restore) a community you created.
    pub async fn delete(&self, community_id: i32, deleted: bool) -> LemmyResult<CommunityResponse> {
        let form = DeleteCommunity {
            community_id,
            deleted,
        };
        self.client.http.request(&endpoints::DELETE_COMMUNITY, &form).await
    }

    /// Admin removal.
    pub async fn remove(&self, form: &RemoveCommunity) -> LemmyResult<CommunityResponse> {
        self.client.http.request(&endpoints::REMOVE_COMMUNITY, form).await
    }

    pub async fn follow(&self, community_id: i32, follow: bool) -> LemmyResult<CommunityResponse> {
        let form = FollowCommunity {
            community_id,
            follow,
        };
        self.client.http.request(&endpoints::FOLLOW_COMMUNITY, &form).await
    }

    pub async fn block(
        &self,
        community_id: i32,
        block: bool,
    ) -> LemmyResult<BlockCommunityResponse> {
        let form = BlockCommunity {
            community_id,
            block,
        };
        self.client.http.request(&endpoints::BLOCK_COMMUNITY, &form).await
    }

    pub async fn ban_user(&self, form: &BanFromCommunity) -> LemmyResult<BanFromCommunityResponse> {
        self.client.http.request(&endpoints::BAN_FROM_COMMUNITY, form).await
    }

    pub async fn add_mod(
        &self,
        community_id: i32,
        person_id: i32,
        added: bool,
    ) -> LemmyResult<AddModToCommunityResponse> {
        let form = AddModToCommunity {
            community_id,
            person_id,
            added,
        };
        self.client.http.request(&endpoints::ADD_MOD_TO_COMMUNITY, &form).await
    }

    /// Hand the top moderator position to another moderator.
    pub async fn transfer(
        &self,
        community_id: i32,
        person_id: i32,
    ) -> LemmyResult<GetCommunityResponse> {
        let form = TransferCommunity {
            community_id,
            person_id,
        };
        self.client.http.request(&endpoints::TRANSFER_COMMUNITY, &form).await
    }
}

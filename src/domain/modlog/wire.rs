//! Wire types for the mod log query.

use serde::{Deserialize, Serialize};

use crate::domain::modlog::{
    AdminPurgeCommentView, AdminPurgeCommunityView, AdminPurgePersonView, AdminPurgePostView,
    ModAddCommunityView, ModAddView, ModBanFromCommunityView, ModBanView, ModFeaturePostView,
    ModHideCommunityView, ModLockPostView, ModRemoveCommentView, ModRemoveCommunityView,
    ModRemovePostView, ModTransferCommunityView,
};
use crate::shared::ModlogActionType;

/// Mod log filter. `type_` is always sent; use [`ModlogActionType::All`] for
/// an unfiltered log.
#[derive(Debug, Clone, Serialize)]
pub struct GetModlog {
    pub type_: ModlogActionType,
    pub community_id: Option<i32>,
    pub mod_person_id: Option<i32>,
    pub other_person_id: Option<i32>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl GetModlog {
    pub fn new(type_: ModlogActionType) -> Self {
        Self {
            type_,
            community_id: None,
            mod_person_id: None,
            other_person_id: None,
            page: None,
            limit: None,
        }
    }

    pub fn for_community(mut self, community_id: i32) -> Self {
        self.community_id = Some(community_id);
        self
    }
}

impl Default for GetModlog {
    fn default() -> Self {
        Self::new(ModlogActionType::All)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GetModlogResponse {
    #[serde(default)]
    pub removed_posts: Vec<ModRemovePostView>,
    #[serde(default)]
    pub locked_posts: Vec<ModLockPostView>,
    #[serde(default)]
    pub featured_posts: Vec<ModFeaturePostView>,
    #[serde(default)]
    pub removed_comments: Vec<ModRemoveCommentView>,
    #[serde(default)]
    pub removed_communities: Vec<ModRemoveCommunityView>,
    #[serde(default)]
    pub banned_from_community: Vec<ModBanFromCommunityView>,
    #[serde(default)]
    pub banned: Vec<ModBanView>,
    #[serde(default)]
    pub added_to_community: Vec<ModAddCommunityView>,
    #[serde(default)]
    pub transferred_to_community: Vec<ModTransferCommunityView>,
    #[serde(default)]
    pub added: Vec<ModAddView>,
    #[serde(default)]
    pub admin_purged_persons: Vec<AdminPurgePersonView>,
    #[serde(default)]
    pub admin_purged_communities: Vec<AdminPurgeCommunityView>,
    #[serde(default)]
    pub admin_purged_posts: Vec<AdminPurgePostView>,
    #[serde(default)]
    pub admin_purged_comments: Vec<AdminPurgeCommentView>,
    #[serde(default)]
    pub hidden_communities: Vec<ModHideCommunityView>,
}

impl GetModlogResponse {
    /// Total number of entries across all action kinds.
    pub fn len(&self) -> usize {
        self.removed_posts.len()
            + self.locked_posts.len()
            + self.featured_posts.len()
            + self.removed_comments.len()
            + self.removed_communities.len()
            + self.banned_from_community.len()
            + self.banned.len()
            + self.added_to_community.len()
            + self.transferred_to_community.len()
            + self.added.len()
            + self.admin_purged_persons.len()
            + self.admin_purged_communities.len()
            + self.admin_purged_posts.len()
            + self.admin_purged_comments.len()
            + self.hidden_communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

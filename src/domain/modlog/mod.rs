//! Modlog domain — moderator and admin action records and their views.
//!
//! Every record carries a `when_` timestamp instead of `published`. The acting
//! moderator is `None` when the site hides moderator names.

pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::comment::Comment;
use crate::domain::community::Community;
use crate::domain::person::Person;
use crate::domain::post::Post;
use crate::shared::{impl_lemmy_object, parse_timestamp};

/// A logged moderation action.
pub trait ModAction {
    fn when(&self) -> &str;

    fn when_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.when())
    }
}

macro_rules! impl_mod_action {
    ($($ty:ty),+ $(,)?) => {
        $(impl ModAction for $ty {
            fn when(&self) -> &str {
                &self.when_
            }
        })+
    };
}

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModRemovePost {
    pub id: i32,
    pub mod_person_id: i32,
    pub post_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub removed: bool,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModLockPost {
    pub id: i32,
    pub mod_person_id: i32,
    pub post_id: i32,
    pub locked: bool,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModFeaturePost {
    pub id: i32,
    pub mod_person_id: i32,
    pub post_id: i32,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured_community: Option<bool>,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModRemoveComment {
    pub id: i32,
    pub mod_person_id: i32,
    pub comment_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub removed: bool,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModRemoveCommunity {
    pub id: i32,
    pub mod_person_id: i32,
    pub community_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub removed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModBanFromCommunity {
    pub id: i32,
    pub mod_person_id: i32,
    pub other_person_id: i32,
    pub community_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModBan {
    pub id: i32,
    pub mod_person_id: i32,
    pub other_person_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModAddCommunity {
    pub id: i32,
    pub mod_person_id: i32,
    pub other_person_id: i32,
    pub community_id: i32,
    pub removed: bool,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModTransferCommunity {
    pub id: i32,
    pub mod_person_id: i32,
    pub other_person_id: i32,
    pub community_id: i32,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModAdd {
    pub id: i32,
    pub mod_person_id: i32,
    pub other_person_id: i32,
    pub removed: bool,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModHideCommunity {
    pub id: i32,
    pub community_id: i32,
    pub mod_person_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub hidden: bool,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgePerson {
    pub id: i32,
    pub admin_person_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgeCommunity {
    pub id: i32,
    pub admin_person_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgePost {
    pub id: i32,
    pub admin_person_id: i32,
    pub community_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub when_: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgeComment {
    pub id: i32,
    pub admin_person_id: i32,
    pub post_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub when_: String,
}

impl_lemmy_object!(
    ModRemovePost,
    ModLockPost,
    ModFeaturePost,
    ModRemoveComment,
    ModRemoveCommunity,
    ModBanFromCommunity,
    ModBan,
    ModAddCommunity,
    ModTransferCommunity,
    ModAdd,
    ModHideCommunity,
    AdminPurgePerson,
    AdminPurgeCommunity,
    AdminPurgePost,
    AdminPurgeComment,
);

impl_mod_action!(
    ModRemovePost,
    ModLockPost,
    ModFeaturePost,
    ModRemoveComment,
    ModRemoveCommunity,
    ModBanFromCommunity,
    ModBan,
    ModAddCommunity,
    ModTransferCommunity,
    ModAdd,
    ModHideCommunity,
    AdminPurgePerson,
    AdminPurgeCommunity,
    AdminPurgePost,
    AdminPurgeComment,
);

// ─── Views ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModRemovePostView {
    pub mod_remove_post: ModRemovePost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModLockPostView {
    pub mod_lock_post: ModLockPost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModFeaturePostView {
    pub mod_feature_post: ModFeaturePost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModRemoveCommentView {
    pub mod_remove_comment: ModRemoveComment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub comment: Comment,
    pub commenter: Person,
    pub post: Post,
    pub community: Community,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModRemoveCommunityView {
    pub mod_remove_community: ModRemoveCommunity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub community: Community,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModBanFromCommunityView {
    pub mod_ban_from_community: ModBanFromCommunity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub community: Community,
    pub banned_person: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModBanView {
    pub mod_ban: ModBan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub banned_person: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModAddCommunityView {
    pub mod_add_community: ModAddCommunity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub community: Community,
    pub modded_person: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModTransferCommunityView {
    pub mod_transfer_community: ModTransferCommunity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub community: Community,
    pub modded_person: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModAddView {
    pub mod_add: ModAdd,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<Person>,
    pub modded_person: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModHideCommunityView {
    pub mod_hide_community: ModHideCommunity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<Person>,
    pub community: Community,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgePersonView {
    pub admin_purge_person: AdminPurgePerson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgeCommunityView {
    pub admin_purge_community: AdminPurgeCommunity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgePostView {
    pub admin_purge_post: AdminPurgePost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<Person>,
    pub community: Community,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPurgeCommentView {
    pub admin_purge_comment: AdminPurgeComment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<Person>,
    pub post: Post,
}

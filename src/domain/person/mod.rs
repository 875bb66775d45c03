//! Person domain — accounts, local user settings, mentions and replies.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::comment::{Comment, CommentAggregates};
use crate::domain::community::Community;
use crate::domain::post::Post;
use crate::shared::{impl_instance_bound, impl_lemmy_object, impl_published};

/// A user account, local or federated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix_user_id: Option<String>,
    pub actor_id: String,
    pub local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_expires: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Person {
    /// `display_name` when set, `name` otherwise.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonAggregates {
    pub id: i32,
    pub person_id: i32,
    pub post_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_score: Option<i64>,
    pub comment_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_score: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonView {
    pub person: Person,
    pub counts: PersonAggregates,
}

/// Settings of an account registered on this instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalUser {
    pub id: i32,
    pub person_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_application: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_listing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_links_in_new_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notifications_to_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_avatars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_bot_accounts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_new_post_notifs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_read_posts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_scores: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp_2fa_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalUserView {
    pub local_user: LocalUser,
    pub person: Person,
    pub counts: PersonAggregates,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonBlockView {
    pub person: Person,
    pub target: Person,
}

// ─── Inbox ───────────────────────────────────────────────────────────────────

/// A comment that mentions the recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonMention {
    pub id: i32,
    pub recipient_id: i32,
    pub comment_id: i32,
    pub read: bool,
    pub published: String,
}

/// A direct reply to one of the recipient's posts or comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentReply {
    pub id: i32,
    pub recipient_id: i32,
    pub comment_id: i32,
    pub read: bool,
    pub published: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonMentionView {
    pub person_mention: PersonMention,
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    pub recipient: Person,
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
pub struct CommentReplyView {
    pub comment_reply: CommentReply,
    pub comment: Comment,
    pub creator: Person,
    pub post: Post,
    pub community: Community,
    pub recipient: Person,
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

impl_lemmy_object!(Person, PersonAggregates, LocalUser, PersonMention, CommentReply);
impl_instance_bound!(Person);
impl_published!(Person, PersonMention, CommentReply);

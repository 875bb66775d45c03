//! Wire types for person requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::comment::CommentView;
use crate::domain::community::CommunityModeratorView;
use crate::domain::person::{CommentReplyView, PersonMentionView, PersonView};
use crate::domain::post::PostView;
use crate::shared::{CommentSortType, ListingType, SortType};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Look up a person by id or by `username` (`name` or `name@instance`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPersonDetails {
    pub person_id: Option<i32>,
    pub username: Option<String>,
    pub sort: Option<SortType>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub community_id: Option<i32>,
    pub saved_only: Option<bool>,
}

impl GetPersonDetails {
    pub fn by_username(username: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPersonMentions {
    pub sort: Option<CommentSortType>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub unread_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkPersonMentionAsRead {
    pub person_mention_id: i32,
    pub read: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetReplies {
    pub sort: Option<CommentSortType>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub unread_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetReportCount {
    pub community_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockPerson {
    pub person_id: i32,
    pub block: bool,
}

/// Instance-wide ban; `expires` is a unix timestamp.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BanPerson {
    pub person_id: i32,
    pub ban: bool,
    pub remove_data: Option<bool>,
    pub reason: Option<String>,
    pub expires: Option<i64>,
}

/// Account settings; only the fields that are set are changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SaveUserSettings {
    pub show_nsfw: Option<bool>,
    pub show_scores: Option<bool>,
    pub theme: Option<String>,
    pub default_sort_type: Option<SortType>,
    pub default_listing_type: Option<ListingType>,
    pub interface_language: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub matrix_user_id: Option<String>,
    pub show_avatars: Option<bool>,
    pub send_notifications_to_email: Option<bool>,
    pub bot_account: Option<bool>,
    pub show_bot_accounts: Option<bool>,
    pub show_read_posts: Option<bool>,
    pub show_new_post_notifs: Option<bool>,
    pub discussion_languages: Option<Vec<i32>>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetPersonDetailsResponse {
    pub person_view: PersonView,
    pub comments: Vec<CommentView>,
    pub posts: Vec<PostView>,
    pub moderates: Vec<CommunityModeratorView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetPersonMentionsResponse {
    pub mentions: Vec<PersonMentionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonMentionResponse {
    pub person_mention_view: PersonMentionView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetRepliesResponse {
    pub replies: Vec<CommentReplyView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetUnreadCountResponse {
    pub replies: i64,
    pub mentions: i64,
    pub private_messages: i64,
}

impl GetUnreadCountResponse {
    pub fn total(&self) -> i64 {
        self.replies + self.mentions + self.private_messages
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetReportCountResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<i32>,
    pub comment_reports: i64,
    pub post_reports: i64,
    /// Only reported to admins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_message_reports: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockPersonResponse {
    pub person_view: PersonView,
    pub blocked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BanPersonResponse {
    pub person_view: PersonView,
    pub banned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannedPersonsResponse {
    pub banned: Vec<PersonView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::http::params::{encode_query, to_params};
    use serde_json::json;

    #[test]
    fn test_unread_count_total() {
        let resp: GetUnreadCountResponse = serde_json::from_value(json!({
            "replies": 2,
            "mentions": 1,
            "private_messages": 4,
        }))
        .unwrap();
        assert_eq!(resp.total(), 7);
    }

    #[test]
    fn test_report_count_for_moderator() {
        let envelope = json!({"comment_reports": 3, "post_reports": 1});
        let resp: GetReportCountResponse = serde_json::from_value(envelope.clone()).unwrap();
        assert!(resp.private_message_reports.is_none());
        assert_eq!(serde_json::to_value(resp).unwrap(), envelope);
    }

    #[test]
    fn test_save_user_settings_languages_json_encoded_in_query() {
        let form = SaveUserSettings {
            discussion_languages: Some(vec![0, 37]),
            default_sort_type: Some(SortType::New),
            ..Default::default()
        };
        let pairs = encode_query(&to_params(&form).unwrap());
        assert!(pairs.contains(&("discussion_languages".to_string(), "[0,37]".to_string())));
        assert!(pairs.contains(&("default_sort_type".to_string(), "New".to_string())));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_person_details_response() {
        let envelope = json!({
            "person_view": fixtures::person_view_json(1, "alice"),
            "comments": [fixtures::comment_view_json(10, 1)],
            "posts": [fixtures::post_view_json(1)],
            "moderates": [],
        });
        let resp: GetPersonDetailsResponse = serde_json::from_value(envelope.clone()).unwrap();
        assert_eq!(resp.person_view.person.name, "alice");
        fixtures::assert_subset(&serde_json::to_value(&resp).unwrap(), &envelope);
    }
}

//! Wire types for site, search and federation requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::comment::CommentView;
use crate::domain::community::CommunityView;
use crate::domain::custom_emoji::CustomEmojiView;
use crate::domain::person::PersonView;
use crate::domain::post::PostView;
use crate::domain::site::{FederatedInstances, Language, MyUserInfo, SiteMetadata, SiteView, Tagline};
use crate::shared::{ListingType, RegistrationMode, SearchType, SortType};

// ─── Requests ────────────────────────────────────────────────────────────────

/// First-run site setup. Admin only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSite {
    pub name: String,
    pub sidebar: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub enable_downvotes: Option<bool>,
    pub enable_nsfw: Option<bool>,
    pub community_creation_admin_only: Option<bool>,
    pub require_email_verification: Option<bool>,
    pub application_question: Option<String>,
    pub private_instance: Option<bool>,
    pub default_theme: Option<String>,
    pub default_post_listing_type: Option<ListingType>,
    pub legal_information: Option<String>,
    pub application_email_admins: Option<bool>,
    pub hide_modlog_mod_names: Option<bool>,
    pub discussion_languages: Option<Vec<i32>>,
    pub slur_filter_regex: Option<String>,
    pub actor_name_max_length: Option<i32>,
    pub rate_limit_message: Option<i32>,
    pub rate_limit_message_per_second: Option<i32>,
    pub rate_limit_post: Option<i32>,
    pub rate_limit_post_per_second: Option<i32>,
    pub rate_limit_register: Option<i32>,
    pub rate_limit_register_per_second: Option<i32>,
    pub rate_limit_image: Option<i32>,
    pub rate_limit_image_per_second: Option<i32>,
    pub rate_limit_comment: Option<i32>,
    pub rate_limit_comment_per_second: Option<i32>,
    pub rate_limit_search: Option<i32>,
    pub rate_limit_search_per_second: Option<i32>,
    pub federation_enabled: Option<bool>,
    pub federation_debug: Option<bool>,
    pub federation_worker_count: Option<i32>,
    pub captcha_enabled: Option<bool>,
    pub captcha_difficulty: Option<String>,
    pub allowed_instances: Option<Vec<String>>,
    pub blocked_instances: Option<Vec<String>>,
    pub taglines: Option<Vec<String>>,
    pub registration_mode: Option<RegistrationMode>,
    pub reports_email_admins: Option<bool>,
}

impl CreateSite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Partial site update; unset fields are left untouched. Admin only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditSite {
    pub name: Option<String>,
    pub sidebar: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub enable_downvotes: Option<bool>,
    pub enable_nsfw: Option<bool>,
    pub community_creation_admin_only: Option<bool>,
    pub require_email_verification: Option<bool>,
    pub application_question: Option<String>,
    pub private_instance: Option<bool>,
    pub default_theme: Option<String>,
    pub default_post_listing_type: Option<ListingType>,
    pub legal_information: Option<String>,
    pub application_email_admins: Option<bool>,
    pub hide_modlog_mod_names: Option<bool>,
    pub discussion_languages: Option<Vec<i32>>,
    pub slur_filter_regex: Option<String>,
    pub actor_name_max_length: Option<i32>,
    pub rate_limit_message: Option<i32>,
    pub rate_limit_message_per_second: Option<i32>,
    pub rate_limit_post: Option<i32>,
    pub rate_limit_post_per_second: Option<i32>,
    pub rate_limit_register: Option<i32>,
    pub rate_limit_register_per_second: Option<i32>,
    pub rate_limit_image: Option<i32>,
    pub rate_limit_image_per_second: Option<i32>,
    pub rate_limit_comment: Option<i32>,
    pub rate_limit_comment_per_second: Option<i32>,
    pub rate_limit_search: Option<i32>,
    pub rate_limit_search_per_second: Option<i32>,
    pub federation_enabled: Option<bool>,
    pub federation_debug: Option<bool>,
    pub federation_worker_count: Option<i32>,
    pub captcha_enabled: Option<bool>,
    pub captcha_difficulty: Option<String>,
    pub allowed_instances: Option<Vec<String>>,
    pub blocked_instances: Option<Vec<String>>,
    pub taglines: Option<Vec<String>>,
    pub registration_mode: Option<RegistrationMode>,
    pub reports_email_admins: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetSiteMetadata {
    pub url: String,
}

/// Fetch a remote object (post, comment, community or person) by URL or
/// `!community@instance` / `@user@instance` handle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveObject {
    pub q: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Search {
    pub q: String,
    pub community_id: Option<i32>,
    pub community_name: Option<String>,
    pub creator_id: Option<i32>,
    pub type_: Option<SearchType>,
    pub sort: Option<SortType>,
    pub listing_type: Option<ListingType>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Search {
    pub fn new(q: &str) -> Self {
        Self {
            q: q.to_string(),
            ..Default::default()
        }
    }
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetSiteResponse {
    pub site_view: SiteView,
    pub admins: Vec<PersonView>,
    pub version: String,
    /// Present only when the request carried a credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_user: Option<MyUserInfo>,
    #[serde(default)]
    pub all_languages: Vec<Language>,
    #[serde(default)]
    pub discussion_languages: Vec<i32>,
    #[serde(default)]
    pub taglines: Vec<Tagline>,
    #[serde(default)]
    pub custom_emojis: Vec<CustomEmojiView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteResponse {
    pub site_view: SiteView,
    #[serde(default)]
    pub taglines: Vec<Tagline>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetSiteMetadataResponse {
    pub metadata: SiteMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetFederatedInstancesResponse {
    /// `None` when federation is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federated_instances: Option<FederatedInstances>,
}

/// Exactly one field is set on success.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolveObjectResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<PostView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<PersonView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub type_: String,
    pub comments: Vec<CommentView>,
    pub posts: Vec<PostView>,
    pub communities: Vec<CommunityView>,
    pub users: Vec<PersonView>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
            && self.posts.is_empty()
            && self.communities.is_empty()
            && self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::http::params::{encode_query, to_params};
    use serde_json::json;

    fn site_view_json() -> serde_json::Value {
        json!({
            "site": {
                "id": 1,
                "name": "Lemmy",
                "actor_id": "https://lemmy.ml/",
                "published": fixtures::PUBLISHED,
            },
            "local_site": {"id": 1, "site_id": 1, "registration_mode": "Open"},
            "local_site_rate_limit": {"id": 1, "local_site_id": 1, "post": 6, "post_per_second": 600},
            "counts": {"id": 1, "site_id": 1, "users": 10, "posts": 20, "comments": 30, "communities": 4},
        })
    }

    #[test]
    fn test_search_query_uses_type_underscore() {
        let form = Search {
            type_: Some(SearchType::Communities),
            sort: Some(SortType::TopAll),
            ..Search::new("rust")
        };
        let pairs = encode_query(&to_params(&form).unwrap());
        assert!(pairs.contains(&("q".to_string(), "rust".to_string())));
        assert!(pairs.contains(&("type_".to_string(), "Communities".to_string())));
        assert!(pairs.contains(&("sort".to_string(), "TopAll".to_string())));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_edit_site_only_sends_set_fields() {
        let form = EditSite {
            registration_mode: Some(RegistrationMode::RequireApplication),
            taglines: Some(vec!["hello".into()]),
            ..Default::default()
        };
        let params = to_params(&form).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["registration_mode"], "RequireApplication");
        assert_eq!(params["taglines"], json!(["hello"]));
    }

    #[test]
    fn test_get_site_response_anonymous() {
        let envelope = json!({
            "site_view": site_view_json(),
            "admins": [fixtures::person_view_json(1, "admin")],
            "version": "0.18.1",
            "all_languages": [{"id": 0, "code": "und", "name": "Undetermined"}],
            "discussion_languages": [0],
            "taglines": [],
            "custom_emojis": [],
        });
        let resp: GetSiteResponse = serde_json::from_value(envelope.clone()).unwrap();
        assert!(resp.my_user.is_none());
        assert_eq!(resp.site_view.counts.users, 10);
        assert_eq!(resp.site_view.local_site.registration_mode.as_deref(), Some("Open"));
        fixtures::assert_subset(&serde_json::to_value(&resp).unwrap(), &envelope);
    }

    #[test]
    fn test_resolve_object_single_hit() {
        let resp: ResolveObjectResponse = serde_json::from_value(json!({
            "community": fixtures::community_view_json(3, "anime"),
        }))
        .unwrap();
        assert!(resp.post.is_none());
        assert_eq!(resp.community.unwrap().community.name, "anime");
    }

    #[test]
    fn test_federated_instances_disabled() {
        let resp: GetFederatedInstancesResponse =
            serde_json::from_value(json!({"federated_instances": null})).unwrap();
        assert!(resp.federated_instances.is_none());
    }

    #[test]
    fn test_search_response_is_empty() {
        let resp: SearchResponse = serde_json::from_value(json!({
            "type_": "All",
            "comments": [],
            "posts": [],
            "communities": [],
            "users": [],
        }))
        .unwrap();
        assert!(resp.is_empty());
    }
}

//! Site domain — the instance itself: configuration, rate limits, languages,
//! taglines, federation peers and the logged-in user's summary.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::community::{CommunityBlockView, CommunityFollowerView, CommunityModeratorView};
use crate::domain::person::{LocalUserView, PersonBlockView};
use crate::shared::{impl_lemmy_object, impl_published};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub actor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refreshed_at: Option<String>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// Instance-local settings of the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalSite {
    pub id: i32,
    pub site_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_setup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_downvotes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_creation_admin_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_email_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_instance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_post_listing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_modlog_mod_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_email_admins: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slur_filter_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_name_max_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports_email_admins: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// Per-action request budgets: `<action>` requests per `<action>_per_second`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalSiteRateLimit {
    pub id: i32,
    pub local_site_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_per_second: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_per_second: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_per_second: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_per_second: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_per_second: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_per_second: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteAggregates {
    pub id: i32,
    pub site_id: i32,
    pub users: i64,
    pub posts: i64,
    pub comments: i64,
    pub communities: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_half_year: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteView {
    pub site: Site,
    pub local_site: LocalSite,
    pub local_site_rate_limit: LocalSiteRateLimit,
    pub counts: SiteAggregates,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tagline {
    pub id: i32,
    pub local_site_id: i32,
    pub content: String,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub id: i32,
    pub code: String,
    pub name: String,
}

/// A federated peer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instance {
    pub id: i32,
    pub domain: String,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FederatedInstances {
    pub linked: Vec<Instance>,
    pub allowed: Vec<Instance>,
    pub blocked: Vec<Instance>,
}

/// OpenGraph data fetched for a link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_video_url: Option<String>,
}

/// The logged-in user's profile, follows, moderated communities and blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MyUserInfo {
    pub local_user_view: LocalUserView,
    pub follows: Vec<CommunityFollowerView>,
    pub moderates: Vec<CommunityModeratorView>,
    pub community_blocks: Vec<CommunityBlockView>,
    pub person_blocks: Vec<PersonBlockView>,
    pub discussion_languages: Vec<i32>,
}

impl_lemmy_object!(
    Site,
    LocalSite,
    LocalSiteRateLimit,
    SiteAggregates,
    Tagline,
    Language,
    Instance
);
impl_published!(Site, Tagline, Instance);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{LemmyObject, Published};
    use serde_json::json;

    #[test]
    fn test_instance_published_at() {
        let instance: Instance = serde_json::from_value(json!({
            "id": 2,
            "domain": "lemmy.world",
            "published": "2023-06-20T12:34:56.789012",
            "software": "lemmy",
            "version": "0.18.1",
        }))
        .unwrap();
        assert!(instance.published_at().is_some());
        assert_eq!(instance.id_b64(), "Ag");
    }

    #[test]
    fn test_site_metadata_all_optional() {
        let meta: SiteMetadata = serde_json::from_value(json!({})).unwrap();
        assert_eq!(meta, SiteMetadata::default());
    }
}

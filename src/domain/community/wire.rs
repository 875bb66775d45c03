//! Wire types for community requests and responses.
//!
//! `None` form fields are omitted from the request.

use serde::{Deserialize, Serialize};

use crate::domain::community::{CommunityModeratorView, CommunityView};
use crate::domain::person::PersonView;
use crate::domain::site::Site;
use crate::shared::{ListingType, SortType};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Look up a community by id or by name (`name` or `name@instance`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCommunity {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl GetCommunity {
    pub fn by_id(id: i32) -> Self {
        Self {
            id: Some(id),
            name: None,
        }
    }

    pub fn by_name(name: &str) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCommunities {
    pub type_: Option<ListingType>,
    pub sort: Option<SortType>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCommunity {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub nsfw: Option<bool>,
    pub posting_restricted_to_mods: Option<bool>,
    pub discussion_languages: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditCommunity {
    pub community_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub nsfw: Option<bool>,
    pub posting_restricted_to_mods: Option<bool>,
    pub discussion_languages: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteCommunity {
    pub community_id: i32,
    pub deleted: bool,
}

/// Moderator action; `expires` is a unix timestamp.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoveCommunity {
    pub community_id: i32,
    pub removed: bool,
    pub reason: Option<String>,
    pub expires: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FollowCommunity {
    pub community_id: i32,
    pub follow: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockCommunity {
    pub community_id: i32,
    pub block: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BanFromCommunity {
    pub community_id: i32,
    pub person_id: i32,
    pub ban: bool,
    pub remove_data: Option<bool>,
    pub reason: Option<String>,
    /// Unix timestamp; permanent when unset.
    pub expires: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AddModToCommunity {
    pub community_id: i32,
    pub person_id: i32,
    pub added: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferCommunity {
    pub community_id: i32,
    pub person_id: i32,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetCommunityResponse {
    pub community_view: CommunityView,
    /// Set when the community is hosted on another instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    pub moderators: Vec<CommunityModeratorView>,
    pub discussion_languages: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityResponse {
    pub community_view: CommunityView,
    pub discussion_languages: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListCommunitiesResponse {
    pub communities: Vec<CommunityView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockCommunityResponse {
    pub community_view: CommunityView,
    pub blocked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BanFromCommunityResponse {
    pub person_view: PersonView,
    pub banned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddModToCommunityResponse {
    pub moderators: Vec<CommunityModeratorView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::http::params::to_params;
    use serde_json::json;

    #[test]
    fn test_get_community_by_name_params() {
        let params = to_params(&GetCommunity::by_name("anime")).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["name"], "anime");
    }

    #[test]
    fn test_list_communities_enum_params() {
        let form = ListCommunities {
            type_: Some(ListingType::Local),
            sort: Some(SortType::TopWeek),
            ..Default::default()
        };
        let params = to_params(&form).unwrap();
        assert_eq!(params["type_"], "Local");
        assert_eq!(params["sort"], "TopWeek");
        assert!(!params.contains_key("page"));
    }

    #[test]
    fn test_get_community_response() {
        let envelope = json!({
            "community_view": fixtures::community_view_json(3, "anime"),
            "moderators": [{
                "community": fixtures::community_json(3, "anime", false),
                "moderator": fixtures::person_json(1, "alice", false),
            }],
            "discussion_languages": [0, 37],
            "default_post_language": null,
        });
        let resp: GetCommunityResponse = serde_json::from_value(envelope.clone()).unwrap();
        assert!(resp.site.is_none());
        assert_eq!(resp.moderators[0].moderator.name, "alice");
        fixtures::assert_subset(&serde_json::to_value(&resp).unwrap(), &envelope);
    }
}

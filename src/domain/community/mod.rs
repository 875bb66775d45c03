//! Community domain — communities, their moderators, followers and blocks.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::person::Person;
use crate::shared::{impl_instance_bound, impl_lemmy_object, impl_published};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Community {
    pub id: i32,
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_restricted_to_mods: Option<bool>,
    pub actor_id: String,
    pub local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<i32>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Community {
    /// `name@host` for remote communities, `name` for local ones.
    pub fn qualified_name(&self) -> String {
        use crate::shared::InstanceBound;
        match self.instance_domain() {
            Some(domain) => format!("{}@{}", self.name, domain),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityAggregates {
    pub id: i32,
    pub community_id: i32,
    pub subscribers: i64,
    pub posts: i64,
    pub comments: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_active_half_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_rank: Option<i64>,
}

/// A community as seen by the caller.
///
/// `subscribed` is the raw subscription state (`Subscribed`,
/// `NotSubscribed`, `Pending`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityView {
    pub community: Community,
    pub subscribed: String,
    pub blocked: bool,
    pub counts: CommunityAggregates,
}

impl CommunityView {
    pub fn is_subscribed(&self) -> bool {
        self.subscribed == "Subscribed"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityModeratorView {
    pub community: Community,
    pub moderator: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityFollowerView {
    pub community: Community,
    pub follower: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommunityBlockView {
    pub person: Person,
    pub community: Community,
}

impl_lemmy_object!(Community, CommunityAggregates);
impl_instance_bound!(Community);
impl_published!(Community);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;

    #[test]
    fn test_qualified_name() {
        let remote: Community =
            serde_json::from_value(fixtures::community_json(1, "anime", false)).unwrap();
        assert_eq!(remote.qualified_name(), "anime@lemmy.world");

        let local: Community =
            serde_json::from_value(fixtures::community_json(2, "rust", true)).unwrap();
        assert_eq!(local.qualified_name(), "rust");
    }

    #[test]
    fn test_community_view() {
        let envelope = fixtures::community_view_json(3, "anime");
        let view: CommunityView = serde_json::from_value(envelope.clone()).unwrap();
        assert!(!view.is_subscribed());
        assert_eq!(view.counts.subscribers, 42);
        fixtures::assert_subset(&serde_json::to_value(&view).unwrap(), &envelope);
    }
}

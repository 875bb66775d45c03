//! Wire types for admin requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::admin::RegistrationApplicationView;
use crate::domain::person::PersonView;
use crate::shared::SuccessResponse;

// ─── Requests ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct AddAdmin {
    pub person_id: i32,
    pub added: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgePerson {
    pub person_id: i32,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeCommunity {
    pub community_id: i32,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgePost {
    pub post_id: i32,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeComment {
    pub comment_id: i32,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRegistrationApplications {
    pub unread_only: Option<bool>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Approve (`approve = true`) or deny an application.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApproveRegistrationApplication {
    pub id: i32,
    pub approve: bool,
    pub deny_reason: Option<String>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddAdminResponse {
    pub admins: Vec<PersonView>,
}

pub type PurgeItemResponse = SuccessResponse;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListRegistrationApplicationsResponse {
    pub registration_applications: Vec<RegistrationApplicationView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationApplicationResponse {
    pub registration_application: RegistrationApplicationView,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetUnreadRegistrationApplicationCountResponse {
    pub registration_applications: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::http::params::to_params;
    use serde_json::json;

    #[test]
    fn test_purge_without_reason() {
        let params = to_params(&PurgePost {
            post_id: 4,
            reason: None,
        })
        .unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["post_id"], 4);
    }

    #[test]
    fn test_deny_application_sends_reason() {
        let params = to_params(&ApproveRegistrationApplication {
            id: 7,
            approve: false,
            deny_reason: Some("no answer".into()),
        })
        .unwrap();
        assert_eq!(params["approve"], false);
        assert_eq!(params["deny_reason"], "no answer");
    }

    #[test]
    fn test_pending_application_view() {
        let envelope = json!({
            "registration_application": {
                "id": 7,
                "local_user_id": 12,
                "answer": "I like rust",
                "published": fixtures::PUBLISHED,
            },
            "creator_local_user": {"id": 12, "person_id": 2, "email": "bob@example.com"},
            "creator": fixtures::person_json(2, "bob", true),
            "admin": null,
        });
        let view: RegistrationApplicationView = serde_json::from_value(envelope).unwrap();
        assert!(!view.registration_application.is_reviewed());
        assert!(view.admin.is_none());
        assert_eq!(view.creator.name, "bob");
    }
}

//! Endpoint catalog: one [`Endpoint`] per Lemmy API operation.
//!
//! Paths are relative to `/api/v3` and are an external contract; they are
//! spelled exactly as the Lemmy API defines them.

use crate::http::{AuthMode, Method};

/// A named API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub auth: AuthMode,
}

impl Endpoint {
    pub const fn new(name: &'static str, method: Method, path: &'static str, auth: AuthMode) -> Self {
        Self {
            name,
            method,
            path,
            auth,
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.auth == AuthMode::Required
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.name, self.method, self.path)
    }
}

/// Look up an endpoint by operation name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|e| e.name == name)
}

// ── Auth / account ─────────────────────────────────────────────────────────

pub const LOGIN: Endpoint =
    Endpoint::new("login", Method::Post, "/user/login", AuthMode::Anonymous);
pub const REGISTER: Endpoint =
    Endpoint::new("register", Method::Post, "/user/register", AuthMode::Anonymous);
pub const GET_CAPTCHA: Endpoint =
    Endpoint::new("get_captcha", Method::Get, "/user/get_captcha", AuthMode::Anonymous);
pub const PASSWORD_RESET: Endpoint =
    Endpoint::new("password_reset", Method::Post, "/user/password_reset", AuthMode::Anonymous);
pub const PASSWORD_CHANGE_AFTER_RESET: Endpoint =
    Endpoint::new("password_change_after_reset", Method::Post, "/user/password_change", AuthMode::Anonymous);
pub const CHANGE_PASSWORD: Endpoint =
    Endpoint::new("change_password", Method::Put, "/user/change_password", AuthMode::Required);
pub const VERIFY_EMAIL: Endpoint =
    Endpoint::new("verify_email", Method::Post, "/user/verify_email", AuthMode::Anonymous);
pub const DELETE_ACCOUNT: Endpoint =
    Endpoint::new("delete_account", Method::Post, "/user/delete_account", AuthMode::Required);

// ── Site ───────────────────────────────────────────────────────────────────

pub const GET_SITE: Endpoint = Endpoint::new("get_site", Method::Get, "/site", AuthMode::Optional);
pub const CREATE_SITE: Endpoint =
    Endpoint::new("create_site", Method::Post, "/site", AuthMode::Required);
pub const EDIT_SITE: Endpoint =
    Endpoint::new("edit_site", Method::Put, "/site", AuthMode::Required);
pub const GET_SITE_METADATA: Endpoint =
    Endpoint::new("get_site_metadata", Method::Get, "/post/site_metadata", AuthMode::Optional);
pub const GET_FEDERATED_INSTANCES: Endpoint =
    Endpoint::new("get_federated_instances", Method::Get, "/federated_instances", AuthMode::Optional);
pub const RESOLVE_OBJECT: Endpoint =
    Endpoint::new("resolve_object", Method::Get, "/resolve_object", AuthMode::Optional);
pub const SEARCH: Endpoint = Endpoint::new("search", Method::Get, "/search", AuthMode::Optional);
pub const GET_MODLOG: Endpoint =
    Endpoint::new("get_modlog", Method::Get, "/modlog", AuthMode::Optional);
pub const LEAVE_ADMIN: Endpoint =
    Endpoint::new("leave_admin", Method::Post, "/user/leave_admin", AuthMode::Required);

// ── Community ──────────────────────────────────────────────────────────────

pub const GET_COMMUNITY: Endpoint =
    Endpoint::new("get_community", Method::Get, "/community", AuthMode::Optional);
pub const LIST_COMMUNITIES: Endpoint =
    Endpoint::new("list_communities", Method::Get, "/community/list", AuthMode::Optional);
pub const CREATE_COMMUNITY: Endpoint =
    Endpoint::new("create_community", Method::Post, "/community", AuthMode::Required);
pub const EDIT_COMMUNITY: Endpoint =
    Endpoint::new("edit_community", Method::Put, "/community", AuthMode::Required);
pub const DELETE_COMMUNITY: Endpoint =
    Endpoint::new("delete_community", Method::Post, "/community/delete", AuthMode::Required);
pub const REMOVE_COMMUNITY: Endpoint =
    Endpoint::new("remove_community", Method::Post, "/community/remove", AuthMode::Required);
pub const FOLLOW_COMMUNITY: Endpoint =
    Endpoint::new("follow_community", Method::Post, "/community/follow", AuthMode::Required);
pub const BLOCK_COMMUNITY: Endpoint =
    Endpoint::new("block_community", Method::Post, "/community/block", AuthMode::Required);
pub const BAN_FROM_COMMUNITY: Endpoint =
    Endpoint::new("ban_from_community", Method::Post, "/community/ban_user", AuthMode::Required);
pub const ADD_MOD_TO_COMMUNITY: Endpoint =
    Endpoint::new("add_mod_to_community", Method::Post, "/community/mod", AuthMode::Required);
pub const TRANSFER_COMMUNITY: Endpoint =
    Endpoint::new("transfer_community", Method::Post, "/community/transfer", AuthMode::Required);

// ── Post ───────────────────────────────────────────────────────────────────

pub const GET_POST: Endpoint = Endpoint::new("get_post", Method::Get, "/post", AuthMode::Optional);
pub const GET_POSTS: Endpoint =
    Endpoint::new("get_posts", Method::Get, "/post/list", AuthMode::Optional);
pub const CREATE_POST: Endpoint =
    Endpoint::new("create_post", Method::Post, "/post", AuthMode::Required);
pub const EDIT_POST: Endpoint =
    Endpoint::new("edit_post", Method::Put, "/post", AuthMode::Required);
pub const DELETE_POST: Endpoint =
    Endpoint::new("delete_post", Method::Post, "/post/delete", AuthMode::Required);
pub const REMOVE_POST: Endpoint =
    Endpoint::new("remove_post", Method::Post, "/post/remove", AuthMode::Required);
pub const LOCK_POST: Endpoint =
    Endpoint::new("lock_post", Method::Post, "/post/lock", AuthMode::Required);
pub const FEATURE_POST: Endpoint =
    Endpoint::new("feature_post", Method::Post, "/post/feature", AuthMode::Required);
pub const LIKE_POST: Endpoint =
    Endpoint::new("like_post", Method::Post, "/post/like", AuthMode::Required);
pub const SAVE_POST: Endpoint =
    Endpoint::new("save_post", Method::Put, "/post/save", AuthMode::Required);
pub const MARK_POST_AS_READ: Endpoint =
    Endpoint::new("mark_post_as_read", Method::Post, "/post/mark_as_read", AuthMode::Required);
pub const CREATE_POST_REPORT: Endpoint =
    Endpoint::new("create_post_report", Method::Post, "/post/report", AuthMode::Required);
pub const LIST_POST_REPORTS: Endpoint =
    Endpoint::new("list_post_reports", Method::Get, "/post/report/list", AuthMode::Required);
pub const RESOLVE_POST_REPORT: Endpoint =
    Endpoint::new("resolve_post_report", Method::Put, "/post/report/resolve", AuthMode::Required);

// ── Comment ────────────────────────────────────────────────────────────────

pub const GET_COMMENT: Endpoint =
    Endpoint::new("get_comment", Method::Get, "/comment", AuthMode::Optional);
pub const GET_COMMENTS: Endpoint =
    Endpoint::new("get_comments", Method::Get, "/comment/list", AuthMode::Optional);
pub const CREATE_COMMENT: Endpoint =
    Endpoint::new("create_comment", Method::Post, "/comment", AuthMode::Required);
pub const EDIT_COMMENT: Endpoint =
    Endpoint::new("edit_comment", Method::Put, "/comment", AuthMode::Required);
pub const DELETE_COMMENT: Endpoint =
    Endpoint::new("delete_comment", Method::Post, "/comment/delete", AuthMode::Required);
pub const REMOVE_COMMENT: Endpoint =
    Endpoint::new("remove_comment", Method::Post, "/comment/remove", AuthMode::Required);
pub const DISTINGUISH_COMMENT: Endpoint =
    Endpoint::new("distinguish_comment", Method::Post, "/comment/distinguish", AuthMode::Required);
pub const LIKE_COMMENT: Endpoint =
    Endpoint::new("like_comment", Method::Post, "/comment/like", AuthMode::Required);
pub const SAVE_COMMENT: Endpoint =
    Endpoint::new("save_comment", Method::Put, "/comment/save", AuthMode::Required);
pub const MARK_COMMENT_REPLY_AS_READ: Endpoint =
    Endpoint::new("mark_comment_reply_as_read", Method::Post, "/comment/mark_as_read", AuthMode::Required);
pub const CREATE_COMMENT_REPORT: Endpoint =
    Endpoint::new("create_comment_report", Method::Post, "/comment/report", AuthMode::Required);
pub const LIST_COMMENT_REPORTS: Endpoint =
    Endpoint::new("list_comment_reports", Method::Get, "/comment/report/list", AuthMode::Required);
pub const RESOLVE_COMMENT_REPORT: Endpoint =
    Endpoint::new("resolve_comment_report", Method::Put, "/comment/report/resolve", AuthMode::Required);

// ── Private message ────────────────────────────────────────────────────────

pub const GET_PRIVATE_MESSAGES: Endpoint =
    Endpoint::new("get_private_messages", Method::Get, "/private_message/list", AuthMode::Required);
pub const CREATE_PRIVATE_MESSAGE: Endpoint =
    Endpoint::new("create_private_message", Method::Post, "/private_message", AuthMode::Required);
pub const EDIT_PRIVATE_MESSAGE: Endpoint =
    Endpoint::new("edit_private_message", Method::Put, "/private_message", AuthMode::Required);
pub const DELETE_PRIVATE_MESSAGE: Endpoint =
    Endpoint::new("delete_private_message", Method::Post, "/private_message/delete", AuthMode::Required);
pub const MARK_PRIVATE_MESSAGE_AS_READ: Endpoint =
    Endpoint::new("mark_private_message_as_read", Method::Post, "/private_message/mark_as_read", AuthMode::Required);
pub const CREATE_PRIVATE_MESSAGE_REPORT: Endpoint =
    Endpoint::new("create_private_message_report", Method::Post, "/private_message/report", AuthMode::Required);
pub const LIST_PRIVATE_MESSAGE_REPORTS: Endpoint =
    Endpoint::new("list_private_message_reports", Method::Get, "/private_message/report/list", AuthMode::Required);
pub const RESOLVE_PRIVATE_MESSAGE_REPORT: Endpoint =
    Endpoint::new("resolve_private_message_report", Method::Put, "/private_message/report/resolve", AuthMode::Required);

// ── Person ─────────────────────────────────────────────────────────────────

pub const GET_PERSON_DETAILS: Endpoint =
    Endpoint::new("get_person_details", Method::Get, "/user", AuthMode::Optional);
pub const GET_PERSON_MENTIONS: Endpoint =
    Endpoint::new("get_person_mentions", Method::Get, "/user/mention", AuthMode::Required);
pub const MARK_PERSON_MENTION_AS_READ: Endpoint =
    Endpoint::new("mark_person_mention_as_read", Method::Post, "/user/mention/mark_as_read", AuthMode::Required);
pub const GET_REPLIES: Endpoint =
    Endpoint::new("get_replies", Method::Get, "/user/replies", AuthMode::Required);
pub const MARK_ALL_AS_READ: Endpoint =
    Endpoint::new("mark_all_as_read", Method::Post, "/user/mark_all_as_read", AuthMode::Required);
pub const GET_UNREAD_COUNT: Endpoint =
    Endpoint::new("get_unread_count", Method::Get, "/user/unread_count", AuthMode::Required);
pub const GET_REPORT_COUNT: Endpoint =
    Endpoint::new("get_report_count", Method::Get, "/user/report_count", AuthMode::Required);
pub const BLOCK_PERSON: Endpoint =
    Endpoint::new("block_person", Method::Post, "/user/block", AuthMode::Required);
pub const BAN_PERSON: Endpoint =
    Endpoint::new("ban_person", Method::Post, "/user/ban", AuthMode::Required);
pub const GET_BANNED_PERSONS: Endpoint =
    Endpoint::new("get_banned_persons", Method::Get, "/user/banned", AuthMode::Required);
pub const SAVE_USER_SETTINGS: Endpoint =
    Endpoint::new("save_user_settings", Method::Put, "/user/save_user_settings", AuthMode::Required);

// ── Admin ──────────────────────────────────────────────────────────────────

pub const ADD_ADMIN: Endpoint =
    Endpoint::new("add_admin", Method::Post, "/admin/add", AuthMode::Required);
pub const PURGE_PERSON: Endpoint =
    Endpoint::new("purge_person", Method::Post, "/admin/purge/person", AuthMode::Required);
pub const PURGE_COMMUNITY: Endpoint =
    Endpoint::new("purge_community", Method::Post, "/admin/purge/community", AuthMode::Required);
pub const PURGE_POST: Endpoint =
    Endpoint::new("purge_post", Method::Post, "/admin/purge/post", AuthMode::Required);
pub const PURGE_COMMENT: Endpoint =
    Endpoint::new("purge_comment", Method::Post, "/admin/purge/comment", AuthMode::Required);
pub const LIST_REGISTRATION_APPLICATIONS: Endpoint =
    Endpoint::new("list_registration_applications", Method::Get, "/admin/registration_application/list", AuthMode::Required);
pub const APPROVE_REGISTRATION_APPLICATION: Endpoint =
    Endpoint::new("approve_registration_application", Method::Put, "/admin/registration_application/approve", AuthMode::Required);
pub const GET_UNREAD_REGISTRATION_APPLICATION_COUNT: Endpoint =
    Endpoint::new("get_unread_registration_application_count", Method::Get, "/admin/registration_application/count", AuthMode::Required);

// ── Custom emoji ───────────────────────────────────────────────────────────

pub const CREATE_CUSTOM_EMOJI: Endpoint =
    Endpoint::new("create_custom_emoji", Method::Post, "/custom_emoji", AuthMode::Required);
pub const EDIT_CUSTOM_EMOJI: Endpoint =
    Endpoint::new("edit_custom_emoji", Method::Put, "/custom_emoji", AuthMode::Required);
pub const DELETE_CUSTOM_EMOJI: Endpoint =
    Endpoint::new("delete_custom_emoji", Method::Post, "/custom_emoji/delete", AuthMode::Required);

/// Every operation, in the order above.
pub const ALL: &[Endpoint] = &[
    LOGIN,
    REGISTER,
    GET_CAPTCHA,
    PASSWORD_RESET,
    PASSWORD_CHANGE_AFTER_RESET,
    CHANGE_PASSWORD,
    VERIFY_EMAIL,
    DELETE_ACCOUNT,
    GET_SITE,
    CREATE_SITE,
    EDIT_SITE,
    GET_SITE_METADATA,
    GET_FEDERATED_INSTANCES,
    RESOLVE_OBJECT,
    SEARCH,
    GET_MODLOG,
    LEAVE_ADMIN,
    GET_COMMUNITY,
    LIST_COMMUNITIES,
    CREATE_COMMUNITY,
    EDIT_COMMUNITY,
    DELETE_COMMUNITY,
    REMOVE_COMMUNITY,
    FOLLOW_COMMUNITY,
    BLOCK_COMMUNITY,
    BAN_FROM_COMMUNITY,
    ADD_MOD_TO_COMMUNITY,
    TRANSFER_COMMUNITY,
    GET_POST,
    GET_POSTS,
    CREATE_POST,
    EDIT_POST,
    DELETE_POST,
    REMOVE_POST,
    LOCK_POST,
    FEATURE_POST,
    LIKE_POST,
    SAVE_POST,
    MARK_POST_AS_READ,
    CREATE_POST_REPORT,
    LIST_POST_REPORTS,
    RESOLVE_POST_REPORT,
    GET_COMMENT,
    GET_COMMENTS,
    CREATE_COMMENT,
    EDIT_COMMENT,
    DELETE_COMMENT,
    REMOVE_COMMENT,
    DISTINGUISH_COMMENT,
    LIKE_COMMENT,
    SAVE_COMMENT,
    MARK_COMMENT_REPLY_AS_READ,
    CREATE_COMMENT_REPORT,
    LIST_COMMENT_REPORTS,
    RESOLVE_COMMENT_REPORT,
    GET_PRIVATE_MESSAGES,
    CREATE_PRIVATE_MESSAGE,
    EDIT_PRIVATE_MESSAGE,
    DELETE_PRIVATE_MESSAGE,
    MARK_PRIVATE_MESSAGE_AS_READ,
    CREATE_PRIVATE_MESSAGE_REPORT,
    LIST_PRIVATE_MESSAGE_REPORTS,
    RESOLVE_PRIVATE_MESSAGE_REPORT,
    GET_PERSON_DETAILS,
    GET_PERSON_MENTIONS,
    MARK_PERSON_MENTION_AS_READ,
    GET_REPLIES,
    MARK_ALL_AS_READ,
    GET_UNREAD_COUNT,
    GET_REPORT_COUNT,
    BLOCK_PERSON,
    BAN_PERSON,
    GET_BANNED_PERSONS,
    SAVE_USER_SETTINGS,
    ADD_ADMIN,
    PURGE_PERSON,
    PURGE_COMMUNITY,
    PURGE_POST,
    PURGE_COMMENT,
    LIST_REGISTRATION_APPLICATIONS,
    APPROVE_REGISTRATION_APPLICATION,
    GET_UNREAD_REGISTRATION_APPLICATION_COUNT,
    CREATE_CUSTOM_EMOJI,
    EDIT_CUSTOM_EMOJI,
    DELETE_CUSTOM_EMOJI,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_method_path_pairs_unique() {
        let mut seen = HashSet::new();
        for e in ALL {
            assert!(seen.insert((e.method, e.path)), "duplicate route for {}", e);
        }
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<_> = ALL.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_paths_are_relative_to_api_prefix() {
        for e in ALL {
            assert!(e.path.starts_with('/'), "{}", e);
            assert!(!e.path.starts_with("/api"), "{}", e);
        }
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(ALL.len(), 85);
    }

    #[test]
    fn test_account_bootstrap_is_anonymous() {
        for name in ["login", "register", "get_captcha", "password_reset", "verify_email"] {
            assert_eq!(find(name).unwrap().auth, AuthMode::Anonymous, "{}", name);
        }
    }

    #[test]
    fn test_mutations_require_auth() {
        for e in ALL.iter().filter(|e| !e.method.uses_query()) {
            if e.auth != AuthMode::Anonymous {
                assert!(e.requires_auth(), "{}", e);
            }
        }
    }

    #[test]
    fn test_find() {
        let e = find("get_community").unwrap();
        assert_eq!(e.method, Method::Get);
        assert_eq!(e.path, "/community");
        assert!(find("no_such_operation").is_none());
    }

    #[test]
    fn test_upstream_paths() {
        assert_eq!(EDIT_CUSTOM_EMOJI.method, Method::Put);
        assert_eq!(CREATE_PRIVATE_MESSAGE_REPORT.path, "/private_message/report");
        assert_eq!(PASSWORD_CHANGE_AFTER_RESET.path, "/user/password_change");
    }
}

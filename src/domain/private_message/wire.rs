//! Wire types for private message requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::private_message::{PrivateMessageReportView, PrivateMessageView};

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPrivateMessages {
    pub unread_only: Option<bool>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePrivateMessage {
    pub content: String,
    pub recipient_id: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditPrivateMessage {
    pub private_message_id: i32,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletePrivateMessage {
    pub private_message_id: i32,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkPrivateMessageAsRead {
    pub private_message_id: i32,
    pub read: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePrivateMessageReport {
    pub private_message_id: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPrivateMessageReports {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub unresolved_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvePrivateMessageReport {
    pub report_id: i32,
    pub resolved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateMessageResponse {
    pub private_message_view: PrivateMessageView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateMessagesResponse {
    pub private_messages: Vec<PrivateMessageView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateMessageReportResponse {
    pub private_message_report_view: PrivateMessageReportView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListPrivateMessageReportsResponse {
    pub private_message_reports: Vec<PrivateMessageReportView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use serde_json::json;

    #[test]
    fn test_report_view_without_resolver() {
        let pm = fixtures::private_message_view_json(5);
        let envelope = json!({
            "private_message_report_view": {
                "private_message_report": {
                    "id": 1,
                    "creator_id": 2,
                    "private_message_id": 5,
                    "original_pm_text": "hi",
                    "reason": "spam",
                    "resolved": false,
                    "published": fixtures::PUBLISHED,
                },
                "private_message": pm["private_message"],
                "private_message_creator": pm["creator"],
                "creator": pm["recipient"],
                "resolver": null,
            }
        });
        let resp: PrivateMessageReportResponse = serde_json::from_value(envelope).unwrap();
        let view = resp.private_message_report_view;
        assert!(view.resolver.is_none());
        assert_eq!(view.private_message_report.reason, "spam");
    }
}

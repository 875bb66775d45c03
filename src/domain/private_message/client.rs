//! Private messages sub-client.

use crate::client::LemmyClient;
use crate::domain::private_message::wire::{
    CreatePrivateMessage, CreatePrivateMessageReport, DeletePrivateMessage, EditPrivateMessage,
    GetPrivateMessages, ListPrivateMessageReports, ListPrivateMessageReportsResponse,
    MarkPrivateMessageAsRead, PrivateMessageReportResponse, PrivateMessageResponse,
    PrivateMessagesResponse, ResolvePrivateMessageReport,
};
use crate::endpoints;
use crate::error::LemmyResult;

/// Sub-client for private message operations.
pub struct PrivateMessages<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> PrivateMessages<'a> {
    pub async fn list(&self, form: &GetPrivateMessages) -> LemmyResult<PrivateMessagesResponse> {
        self.client.http.request(&endpoints::GET_PRIVATE_MESSAGES, form).await
    }

    pub async fn create(
        &self,
        recipient_id: i32,
        content: &str,
    ) -> LemmyResult<PrivateMessageResponse> {
        let form = CreatePrivateMessage {
            content: content.to_string(),
            recipient_id,
        };
        self.client.http.request(&endpoints::CREATE_PRIVATE_MESSAGE, &form).await
    }

    pub async fn edit(
        &self,
        private_message_id: i32,
        content: &str,
    ) -> LemmyResult<PrivateMessageResponse> {
        let form = EditPrivateMessage {
            private_message_id,
            content: content.to_string(),
        };
        self.client.http.request(&endpoints::EDIT_PRIVATE_MESSAGE, &form).await
    }

    pub async fn delete(
        &self,
        private_message_id: i32,
        deleted: bool,
    ) -> LemmyResult<PrivateMessageResponse> {
        let form = DeletePrivateMessage {
            private_message_id,
            deleted,
        };
        self.client.http.request(&endpoints::DELETE_PRIVATE_MESSAGE, &form).await
    }

    pub async fn mark_as_read(
        &self,
        private_message_id: i32,
        read: bool,
    ) -> LemmyResult<PrivateMessageResponse> {
        let form = MarkPrivateMessageAsRead {
            private_message_id,
            read,
        };
        self.client
            .http
            .request(&endpoints::MARK_PRIVATE_MESSAGE_AS_READ, &form)
            .await
    }

    pub async fn report(
        &self,
        private_message_id: i32,
        reason: &str,
    ) -> LemmyResult<PrivateMessageReportResponse> {
        let form = CreatePrivateMessageReport {
            private_message_id,
            reason: reason.to_string(),
        };
        self.client
            .http
            .request(&endpoints::CREATE_PRIVATE_MESSAGE_REPORT, &form)
            .await
    }

    /// Admin only.
    pub async fn list_reports(
        &self,
        form: &ListPrivateMessageReports,
    ) -> LemmyResult<ListPrivateMessageReportsResponse> {
        self.client
            .http
            .request(&endpoints::LIST_PRIVATE_MESSAGE_REPORTS, form)
            .await
    }

    pub async fn resolve_report(
        &self,
        report_id: i32,
        resolved: bool,
    ) -> LemmyResult<PrivateMessageReportResponse> {
        let form = ResolvePrivateMessageReport {
            report_id,
            resolved,
        };
        self.client
            .http
            .request(&endpoints::RESOLVE_PRIVATE_MESSAGE_REPORT, &form)
            .await
    }
}

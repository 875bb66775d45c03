//! Private message domain — direct messages and their reports.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::person::Person;
use crate::shared::{impl_lemmy_object, impl_published};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateMessage {
    pub id: i32,
    pub creator_id: i32,
    pub recipient_id: i32,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    pub read: bool,
    pub ap_id: String,
    pub local: bool,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateMessageView {
    pub private_message: PrivateMessage,
    pub creator: Person,
    pub recipient: Person,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateMessageReport {
    pub id: i32,
    pub creator_id: i32,
    pub private_message_id: i32,
    pub original_pm_text: String,
    pub reason: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver_id: Option<i32>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivateMessageReportView {
    pub private_message_report: PrivateMessageReport,
    pub private_message: PrivateMessage,
    pub private_message_creator: Person,
    pub creator: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver: Option<Person>,
}

impl_lemmy_object!(PrivateMessage, PrivateMessageReport);
impl_published!(PrivateMessage, PrivateMessageReport);

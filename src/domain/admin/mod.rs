//! Admin domain — registration applications. Purge and admin-grant forms
//! live in [`wire`].

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::domain::person::{LocalUser, Person};
use crate::shared::{impl_lemmy_object, impl_published};

/// A sign-up awaiting review on instances with `RequireApplication`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationApplication {
    pub id: i32,
    pub local_user_id: i32,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_reason: Option<String>,
    pub published: String,
}

impl RegistrationApplication {
    /// True once an admin has approved or denied the application.
    pub fn is_reviewed(&self) -> bool {
        self.admin_id.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationApplicationView {
    pub registration_application: RegistrationApplication,
    pub creator_local_user: LocalUser,
    pub creator: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<Person>,
}

impl_lemmy_object!(RegistrationApplication);
impl_published!(RegistrationApplication);

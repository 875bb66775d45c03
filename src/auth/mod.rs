//! Authentication — credentials, login/registration and account forms.
//!
//! ## Credential model
//!
//! Lemmy v3 authenticates with an opaque JWT passed as the `auth` parameter
//! (query string for GET, JSON body otherwise). The crate never parses it.
//! A [`Credential`] is bound to a client at construction; switching accounts
//! means building another client with
//! [`LemmyClient::with_credential`](crate::client::LemmyClient::with_credential).
//!
//! `Debug` output redacts the token.

pub mod client;

use serde::{Deserialize, Serialize};

// ============================================================================
// Credential
// ============================================================================

/// Opaque session token obtained from `login`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct Login {
    pub username_or_email: String,
    pub password: String,
}

/// Returned by login, registration, password changes and settings updates.
///
/// `jwt` is absent when registration awaits approval or email verification.
/// Servers may send only `jwt`; the flags then read as `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub registration_created: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verify_email_sent: bool,
}

impl LoginResponse {
    pub fn credential(&self) -> Option<Credential> {
        self.jwt.as_deref().map(Credential::from)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Register {
    pub username: String,
    pub password: String,
    pub password_verify: String,
    pub show_nsfw: bool,
    pub email: Option<String>,
    pub captcha_uuid: Option<String>,
    pub captcha_answer: Option<String>,
    /// Must stay empty; bots fill it.
    pub honeypot: Option<String>,
    /// Answer to the site's application question.
    pub answer: Option<String>,
}

/// Captcha challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptchaResponse {
    /// Base64-encoded PNG.
    pub png: String,
    /// Base64-encoded WAV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wav: Option<String>,
    pub uuid: String,
}

/// `ok` is absent when captchas are disabled on the instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCaptchaResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<CaptchaResponse>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordReset {
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordChangeAfterReset {
    pub token: String,
    pub password: String,
    pub password_verify: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangePassword {
    pub new_password: String,
    pub new_password_verify: String,
    pub old_password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyEmail {
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteAccount {
    pub password: String,
}

//! Auth sub-client — login, registration, captcha, password and account management.

use crate::auth::{
    ChangePassword, Credential, DeleteAccount, GetCaptchaResponse, Login, LoginResponse,
    PasswordChangeAfterReset, PasswordReset, Register, VerifyEmail,
};
use crate::client::LemmyClient;
use crate::endpoints;
use crate::error::{LemmyError, LemmyResult};
use crate::shared::EmptyResponse;

/// Sub-client for account operations.
pub struct Auth<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Auth<'a> {
    /// Log in and return the session credential.
    ///
    /// The credential is not bound to this client; pass it to
    /// [`LemmyClient::with_credential`] for authenticated calls. Fails with
    /// [`LemmyError::Decode`] when the server answers without a `jwt`
    /// (registration pending approval or email verification).
    pub async fn login(&self, username_or_email: &str, password: &str) -> LemmyResult<Credential> {
        let resp = self
            .login_response(&Login {
                username_or_email: username_or_email.to_string(),
                password: password.to_string(),
            })
            .await?;

        resp.credential().ok_or_else(|| {
            tracing::debug!(
                registration_created = resp.registration_created,
                verify_email_sent = resp.verify_email_sent,
                "Login response carried no jwt"
            );
            LemmyError::Decode {
                type_name: "LoginResponse",
                source: <serde_json::Error as serde::de::Error>::missing_field("jwt"),
            }
        })
    }

    /// Log in and return the full response, `jwt` included when issued.
    pub async fn login_response(&self, form: &Login) -> LemmyResult<LoginResponse> {
        self.client.http.request(&endpoints::LOGIN, form).await
    }

    pub async fn register(&self, form: &Register) -> LemmyResult<LoginResponse> {
        self.client.http.request(&endpoints::REGISTER, form).await
    }

    pub async fn get_captcha(&self) -> LemmyResult<GetCaptchaResponse> {
        self.client.http.request(&endpoints::GET_CAPTCHA, &()).await
    }

    /// Ask the instance to email a reset link.
    pub async fn password_reset(&self, email: &str) -> LemmyResult<EmptyResponse> {
        let form = PasswordReset {
            email: email.to_string(),
        };
        self.client.http.request(&endpoints::PASSWORD_RESET, &form).await
    }

    /// Complete a reset with the emailed token.
    pub async fn password_change_after_reset(
        &self,
        form: &PasswordChangeAfterReset,
    ) -> LemmyResult<LoginResponse> {
        self.client
            .http
            .request(&endpoints::PASSWORD_CHANGE_AFTER_RESET, form)
            .await
    }

    pub async fn change_password(&self, form: &ChangePassword) -> LemmyResult<LoginResponse> {
        self.client.http.request(&endpoints::CHANGE_PASSWORD, form).await
    }

    pub async fn verify_email(&self, token: &str) -> LemmyResult<EmptyResponse> {
        let form = VerifyEmail {
            token: token.to_string(),
        };
        self.client.http.request(&endpoints::VERIFY_EMAIL, &form).await
    }

    /// Permanently delete the logged-in account.
    pub async fn delete_account(&self, password: &str) -> LemmyResult<EmptyResponse> {
        let form = DeleteAccount {
            password: password.to_string(),
        };
        self.client.http.request(&endpoints::DELETE_ACCOUNT, &form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::http::{HttpRequest, HttpResponse, Method, Session};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Answers every request with a fixed body and keeps what was sent.
    struct FixedSession {
        body: &'static str,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl FixedSession {
        fn new(body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                body,
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Session for FixedSession {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpResponse::new(200, self.body))
        }
    }

    #[tokio::test]
    async fn test_login_with_jwt_only_response() {
        let session = FixedSession::new(r#"{"jwt": "abc123"}"#);
        let client = LemmyClient::anonymous(session.clone());

        let jwt = client.auth().login("alice", "hunter22").await.unwrap();
        assert_eq!(jwt, Credential::new("abc123"));

        let requests = session.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/api/v3/user/login");
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"username_or_email": "alice", "password": "hunter22"})
        );
    }

    #[tokio::test]
    async fn test_login_without_jwt_is_decode_error() {
        let session = FixedSession::new(r#"{"verify_email_sent": true}"#);
        let client = LemmyClient::anonymous(session);

        let err = client.auth().login("alice", "hunter22").await.unwrap_err();
        assert!(matches!(err, LemmyError::Decode { type_name: "LoginResponse", .. }));
    }
}

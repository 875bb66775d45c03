//! High-level client — `LemmyClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the credential binding and the accessor
//! methods.

use std::sync::Arc;

use crate::auth::client::Auth;
use crate::auth::Credential;
use crate::domain::admin::client::Admin;
use crate::domain::comment::client::Comments;
use crate::domain::community::client::Communities;
use crate::domain::custom_emoji::client::CustomEmojis;
use crate::domain::person::client::Persons;
use crate::domain::post::client::Posts;
use crate::domain::private_message::client::PrivateMessages;
use crate::domain::site::client::SiteClient;
use crate::http::{LemmyHttp, Session};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::admin::client::Admin as AdminClient;
pub use crate::domain::comment::client::Comments as CommentsClient;
pub use crate::domain::community::client::Communities as CommunitiesClient;
pub use crate::domain::custom_emoji::client::CustomEmojis as CustomEmojisClient;
pub use crate::domain::person::client::Persons as PersonsClient;
pub use crate::domain::post::client::Posts as PostsClient;
pub use crate::domain::private_message::client::PrivateMessages as PrivateMessagesClient;
pub use crate::domain::site::client::SiteClient as SiteSubClient;

/// The primary entry point for the Lemmy API.
///
/// Binds a [`Session`] and an optional [`Credential`]. Provides nested
/// sub-client accessors for each domain: `client.posts()`,
/// `client.communities()`, etc. Cloning is cheap and clones share the
/// session.
#[derive(Debug, Clone)]
pub struct LemmyClient {
    pub(crate) http: LemmyHttp,
}

impl LemmyClient {
    pub fn new(session: Arc<dyn Session>, credential: Option<Credential>) -> Self {
        Self {
            http: LemmyHttp::new(session, credential),
        }
    }

    /// Client without a credential.
    pub fn anonymous(session: Arc<dyn Session>) -> Self {
        Self::new(session, None)
    }

    #[cfg(feature = "http")]
    pub fn builder() -> LemmyClientBuilder {
        LemmyClientBuilder::default()
    }

    /// Same session, bound to `credential`.
    pub fn with_credential(&self, credential: Credential) -> Self {
        Self {
            http: self.http.with_credential(Some(credential)),
        }
    }

    /// Same session, no credential.
    pub fn without_credential(&self) -> Self {
        Self {
            http: self.http.with_credential(None),
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.http.credential()
    }

    pub fn is_authenticated(&self) -> bool {
        self.http.has_credential()
    }

    /// Low-level dispatcher, for endpoints not covered by a sub-client.
    pub fn http(&self) -> &LemmyHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn site(&self) -> SiteClient<'_> {
        SiteClient { client: self }
    }

    pub fn communities(&self) -> Communities<'_> {
        Communities { client: self }
    }

    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments { client: self }
    }

    pub fn private_messages(&self) -> PrivateMessages<'_> {
        PrivateMessages { client: self }
    }

    pub fn persons(&self) -> Persons<'_> {
        Persons { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    pub fn custom_emojis(&self) -> CustomEmojis<'_> {
        CustomEmojis { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
pub use builder::LemmyClientBuilder;

#[cfg(feature = "http")]
mod builder {
    use std::sync::Arc;
    use std::time::Duration;

    use super::LemmyClient;
    use crate::auth::Credential;
    use crate::error::{LemmyError, LemmyResult};
    use crate::http::{ReqwestSession, ReqwestSessionBuilder};
    use crate::network::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

    /// Builds a [`LemmyClient`] over a [`ReqwestSession`].
    pub struct LemmyClientBuilder {
        base_url: Option<String>,
        timeout: Duration,
        connect_timeout: Option<Duration>,
        user_agent: String,
        headers: Vec<(String, String)>,
        credential: Option<Credential>,
        http_client: Option<reqwest::Client>,
    }

    impl Default for LemmyClientBuilder {
        fn default() -> Self {
            Self {
                base_url: None,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                connect_timeout: None,
                user_agent: DEFAULT_USER_AGENT.to_string(),
                headers: Vec::new(),
                credential: None,
                http_client: None,
            }
        }
    }

    impl LemmyClientBuilder {
        /// Instance origin, e.g. `https://lemmy.ml`.
        pub fn base_url(mut self, url: &str) -> Self {
            self.base_url = Some(url.to_string());
            self
        }

        pub fn timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }

        pub fn connect_timeout(mut self, timeout: Duration) -> Self {
            self.connect_timeout = Some(timeout);
            self
        }

        pub fn user_agent(mut self, user_agent: &str) -> Self {
            self.user_agent = user_agent.to_string();
            self
        }

        /// Extra header sent with every request.
        pub fn header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        /// Pre-set the credential on construction.
        pub fn credential(mut self, credential: Credential) -> Self {
            self.credential = Some(credential);
            self
        }

        /// Use a caller-configured `reqwest::Client`. Timeout, user agent and
        /// headers set on this builder are then ignored.
        pub fn http_client(mut self, client: reqwest::Client) -> Self {
            self.http_client = Some(client);
            self
        }

        pub fn build(self) -> LemmyResult<LemmyClient> {
            let base_url = self.base_url.as_deref().unwrap_or_default();

            let session = match self.http_client {
                Some(client) => ReqwestSession::with_client(client, base_url)?,
                None => {
                    let mut builder: ReqwestSessionBuilder = ReqwestSession::builder(base_url)
                        .timeout(self.timeout)
                        .user_agent(&self.user_agent);
                    if let Some(connect_timeout) = self.connect_timeout {
                        builder = builder.connect_timeout(connect_timeout);
                    }
                    for (name, value) in &self.headers {
                        builder = builder.header(name, value);
                    }
                    builder.build().map_err(LemmyError::from)?
                }
            };

            tracing::debug!(
                base_url = %session.base_url(),
                authenticated = self.credential.is_some(),
                "Built Lemmy client"
            );

            Ok(LemmyClient::new(Arc::new(session), self.credential))
        }
    }
}

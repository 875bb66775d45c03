//! `Session` over `reqwest::Client`, bound to one base URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;

use crate::error::SessionError;
use crate::http::session::{HttpRequest, HttpResponse, Method, Session};
use crate::network::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Reqwest-backed [`Session`].
///
/// Connection pooling, TLS and timeouts are reqwest's. Cloning shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestSession {
    client: Client,
    base_url: String,
}

impl ReqwestSession {
    /// Session with default timeout and user agent.
    pub fn new(base_url: &str) -> Result<Self, SessionError> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: &str) -> ReqwestSessionBuilder {
        ReqwestSessionBuilder::new(base_url)
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, SessionError> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Base origin without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Session for ReqwestSession {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
        let url = self.url_for(&request.path);
        let mut builder = self.client.request(request.method.into(), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

fn map_reqwest_error(e: reqwest::Error) -> SessionError {
    if e.is_timeout() {
        SessionError::Timeout
    } else {
        SessionError::Reqwest(e)
    }
}

/// Validate scheme (`http`/`https`), reject query and fragment, and return
/// the parsed origin plus path without trailing slashes.
fn normalize_base_url(base_url: &str) -> Result<String, SessionError> {
    if base_url.trim().is_empty() {
        return Err(SessionError::InvalidUrl("URL cannot be empty".into()));
    }
    let parsed = Url::parse(base_url)
        .map_err(|e| SessionError::InvalidUrl(format!("{}: {}", base_url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SessionError::InvalidUrl(format!(
            "unsupported scheme {:?}, URL must start with http:// or https://",
            parsed.scheme()
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(SessionError::InvalidUrl(format!(
            "{}: base URL cannot carry a query or fragment",
            parsed
        )));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ReqwestSessionBuilder {
    base_url: String,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    user_agent: String,
    headers: Vec<(String, String)>,
}

impl ReqwestSessionBuilder {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
        }
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

    pub fn build(self) -> Result<ReqwestSession, SessionError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| SessionError::Other(format!("Invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SessionError::Other(format!("Invalid header value: {}", e)))?;
            default_headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .default_headers(default_headers);
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(ReqwestSession {
            client: builder.build()?,
            base_url,
        })
    }
}

//! Transport seam: plain-data requests/responses and the `Session` trait.
//!
//! The dispatcher never talks to a concrete HTTP library. It builds an
//! [`HttpRequest`], hands it to whatever [`Session`] the caller injected and
//! decodes the [`HttpResponse`] that comes back. The session owns the base
//! origin, connection pooling and timeouts.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SessionError;
use crate::http::params;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// GET and DELETE carry their parameters in the query string,
    /// every other method in a JSON body.
    pub fn uses_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `path` is relative to the session's base origin and already carries the
/// API prefix. `Debug` output may contain the credential; do not log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// URL-encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        params::query_string(&self.query)
    }

    /// Path plus query string, as it goes on the request line.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as lossy UTF-8, for diagnostics.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Anything that can send one request and await the full response.
///
/// Implementations are bound to a base origin and are shared across
/// concurrent calls, so `send` takes `&self`. Dropping the returned future
/// abandons the request.
#[async_trait]
pub trait Session: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SessionError>;
}

#[async_trait]
impl<S: Session + ?Sized> Session for Arc<S> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
        (**self).send(request).await
    }
}

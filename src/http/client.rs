//! Request dispatcher — `LemmyHttp`.
//!
//! Every endpoint call goes through [`LemmyHttp::call`]: credential
//! injection, query/body encoding, one `Session::send`, JSON decoding and
//! error normalization. Sub-clients use [`LemmyHttp::request`], which adds
//! form serialization and typed projection on top.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::Credential;
use crate::endpoints::Endpoint;
use crate::error::{LemmyError, LemmyResult, TransportError};
use crate::http::params::{self, Params};
use crate::http::session::{HttpRequest, HttpResponse, Method, Session};
use crate::network::{API_PREFIX, AUTH_PARAM, ERROR_FIELD, MAX_ERROR_BODY_LEN};

/// How an endpoint treats the client's credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// Fail with [`LemmyError::AuthRequired`] when the client has no credential.
    Required,
    /// Attach the credential when the client has one.
    Optional,
    /// Never attach the credential.
    Anonymous,
}

/// Low-level dispatcher bound to a session and an optional credential.
///
/// Holds no per-call state; clones share the session.
#[derive(Clone)]
pub struct LemmyHttp {
    session: Arc<dyn Session>,
    credential: Option<Credential>,
}

impl LemmyHttp {
    pub fn new(session: Arc<dyn Session>, credential: Option<Credential>) -> Self {
        Self {
            session,
            credential,
        }
    }

    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Same session, different credential.
    pub fn with_credential(&self, credential: Option<Credential>) -> Self {
        Self {
            session: self.session.clone(),
            credential,
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// Execute one API call and return the decoded JSON payload.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        params: Params,
        auth: AuthMode,
    ) -> LemmyResult<Value> {
        let request = self.build_request(method, path, params, auth)?;

        tracing::debug!(method = %method, path = %path, "Dispatching Lemmy API request");

        let response = self.session.send(request).await.map_err(|e| {
            tracing::debug!(method = %method, path = %path, error = %e, "Session failed");
            LemmyError::from(e)
        })?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = response.status,
            "Received Lemmy API response"
        );

        decode_response(response)
    }

    /// Call a catalog endpoint with a typed form and project the result.
    pub async fn request<F, T>(&self, endpoint: &Endpoint, form: &F) -> LemmyResult<T>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let params = params::to_params(form)?;
        let value = self
            .call(endpoint.method, endpoint.path, params, endpoint.auth)
            .await?;
        project(value)
    }

    /// Assemble the request descriptor without sending it.
    ///
    /// Fails with [`LemmyError::AuthRequired`] when `auth` is
    /// [`AuthMode::Required`] and no credential is bound.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        params: Params,
        auth: AuthMode,
    ) -> LemmyResult<HttpRequest> {
        let credential = match auth {
            AuthMode::Anonymous => None,
            AuthMode::Optional => self.credential.as_ref(),
            AuthMode::Required => Some(self.credential.as_ref().ok_or_else(|| {
                LemmyError::AuthRequired {
                    endpoint: format!("{} {}", method, path),
                }
            })?),
        };

        let mut params = params::strip_nulls(params);
        if let Some(credential) = credential {
            params.insert(
                AUTH_PARAM.to_string(),
                Value::String(credential.as_str().to_string()),
            );
        }

        tracing::trace!(
            method = %method,
            path = %path,
            keys = ?params.keys().filter(|k| k.as_str() != AUTH_PARAM).collect::<Vec<_>>(),
            authenticated = credential.is_some(),
            "Encoding request parameters"
        );

        let path = format!("{}{}", API_PREFIX, path);
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];

        let (query, body) = if method.uses_query() {
            (params::encode_query(&params), None)
        } else {
            headers.push((
                "Content-Type".to_string(),
                "application/json".to_string(),
            ));
            (Vec::new(), Some(params::encode_body(&params)?))
        };

        Ok(HttpRequest {
            method,
            path,
            query,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for LemmyHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmyHttp")
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

/// Decode a response body and normalize errors.
///
/// An `error` field wins over the HTTP status: Lemmy reports some failures
/// with a 200. Without one, any non-2xx status is a transport error.
pub fn decode_response(response: HttpResponse) -> LemmyResult<Value> {
    let status = response.status;
    let value: Value = serde_json::from_slice(&response.body)
        .map_err(|source| TransportError::InvalidJson { status, source })?;

    if let Some(code) = error_code(&value) {
        tracing::debug!(status, code = %code, "Lemmy API returned an error code");
        return Err(LemmyError::Api {
            code: code.to_string(),
            status,
        });
    }

    if !response.is_success() {
        return Err(TransportError::Status {
            status,
            body: truncate(&response.text(), MAX_ERROR_BODY_LEN),
        }
        .into());
    }

    Ok(value)
}

/// Project a decoded payload into its typed result.
pub fn project<T: DeserializeOwned>(value: Value) -> LemmyResult<T> {
    serde_json::from_value(value).map_err(|source| LemmyError::Decode {
        type_name: short_type_name::<T>(),
        source,
    })
}

fn error_code(value: &Value) -> Option<&str> {
    value.as_object()?.get(ERROR_FIELD)?.as_str()
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

//! Unified SDK error types.
//!
//! Every endpoint call resolves to [`LemmyError`]. Callers branch on
//! [`LemmyError::code`] to tell API-level rejections (`Some(code)`) from
//! everything else (`None`).

use thiserror::Error;

/// Result alias used across the crate.
pub type LemmyResult<T> = Result<T, LemmyError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum LemmyError {
    /// The endpoint requires a credential and the client has none.
    /// Raised before any network I/O.
    #[error("Authentication required for {endpoint}")]
    AuthRequired { endpoint: String },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response payload carried an `error` code.
    #[error("Lemmy API returned {code} (HTTP {status})")]
    Api { code: String, status: u16 },

    /// The payload is valid JSON but does not match the expected result shape.
    #[error("Failed to decode {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LemmyError {
    /// The API error code, present exactly for [`LemmyError::Api`].
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// HTTP status of the response that produced this error, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(TransportError::Status { status, .. })
            | Self::Transport(TransportError::InvalidJson { status, .. }) => Some(*status),
            _ => None,
        }
    }

    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Transport and protocol failures. None of these carry an API error code.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Session(#[from] SessionError),

    #[error("Response body (HTTP {status}) is not valid JSON: {source}")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP {status} without an error code: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to encode request parameters: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors raised by a [`Session`](crate::http::Session) implementation.
#[derive(Error, Debug)]
pub enum SessionError {
    #[cfg(feature = "http")]
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Timeout")]
    Timeout,

    /// For custom sessions that abort in-flight requests (shutdown, a
    /// dropped caller). The bundled reqwest session never returns it.
    #[error("Request cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl From<SessionError> for LemmyError {
    fn from(e: SessionError) -> Self {
        LemmyError::Transport(TransportError::Session(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_only_for_api_errors() {
        let api = LemmyError::Api {
            code: "couldnt_find_community".to_string(),
            status: 400,
        };
        assert_eq!(api.code(), Some("couldnt_find_community"));
        assert_eq!(api.status(), Some(400));

        let auth = LemmyError::AuthRequired {
            endpoint: "create_post".to_string(),
        };
        assert!(auth.code().is_none());
        assert!(auth.status().is_none());
        assert!(auth.is_auth_required());

        let transport: LemmyError = SessionError::Timeout.into();
        assert!(transport.code().is_none());
        assert!(transport.is_transport());
    }

    #[test]
    fn test_status_for_status_transport_error() {
        let err = LemmyError::from(TransportError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        });
        assert_eq!(err.status(), Some(502));
        assert!(err.code().is_none());
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_decode_error_display_names_type() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = LemmyError::Decode {
            type_name: "PostResponse",
            source,
        };
        assert!(err.is_decode());
        assert!(err.to_string().contains("PostResponse"));
    }
}

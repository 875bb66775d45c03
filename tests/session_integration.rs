//! Tests of `LemmyClient` over custom `Session` implementations and a raw
//! socket that misbehaves below the HTTP layer.

mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lemmy_client::prelude::*;
use serde_json::{json, Value};

/// Answers every request with a canned payload and records what was sent.
struct ScriptedSession {
    status: u16,
    body: Value,
    sent: Mutex<Vec<HttpRequest>>,
}

impl ScriptedSession {
    fn new(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Session for ScriptedSession {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SessionError> {
        self.sent.lock().unwrap().push(request);
        Ok(HttpResponse::new(
            self.status,
            serde_json::to_vec(&self.body).unwrap(),
        ))
    }
}

// =============================================================================
// Custom sessions
// =============================================================================

mod custom_session {
    use super::*;

    #[tokio::test]
    async fn test_get_posts_typed_query() {
        let session = ScriptedSession::new(200, json!({"posts": []}));
        let client = LemmyClient::anonymous(session.clone());

        let form = GetPosts {
            community_name: Some("rust".into()),
            sort: Some(SortType::TopWeek),
            limit: Some(5),
            ..Default::default()
        };
        let resp = client.posts().list(&form).await.unwrap();
        assert!(resp.posts.is_empty());

        let sent = session.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].path, "/api/v3/post/list");
        assert!(sent[0].body.is_none());
        assert!(sent[0].query.contains(&("sort".to_string(), "TopWeek".to_string())));
        assert!(sent[0].query.contains(&("limit".to_string(), "5".to_string())));
        assert!(!sent[0].query.iter().any(|(k, _)| k == "auth"));
    }

    #[tokio::test]
    async fn test_post_mutation_sends_json_body() {
        let session = ScriptedSession::new(
            200,
            json!({"community_view": common::community_view(3, "anime"), "discussion_languages": []}),
        );
        let client = LemmyClient::new(session.clone(), Some(Credential::new("abc123")));

        client
            .communities()
            .delete(3, true)
            .await
            .unwrap();

        let sent = session.sent();
        assert_eq!(sent[0].method, Method::Post);
        assert!(sent[0].query.is_empty());
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        let body: Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"community_id": 3, "deleted": true, "auth": "abc123"}));
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_session() {
        let session = ScriptedSession::new(200, common::site_response());
        let client = LemmyClient::anonymous(session.clone());
        let other = client.clone();

        let (site_a, site_b) = (client.site(), other.site());
        let (a, b) = tokio::join!(site_a.get(), site_b.get());
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(session.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_raw_call_for_uncatalogued_route() {
        let session = ScriptedSession::new(200, json!({"ok": true}));
        let client = LemmyClient::anonymous(session.clone());

        let mut params = lemmy_client::http::Params::new();
        params.insert("q".into(), json!("x"));
        params.insert("skip".into(), Value::Null);
        let value = client
            .http()
            .call(Method::Get, "/custom/route", params, AuthMode::Optional)
            .await
            .unwrap();
        assert_eq!(value, json!({"ok": true}));
        assert_eq!(session.sent()[0].target(), "/api/v3/custom/route?q=x");
    }

    /// Session that gives up on every request, as one tied to a shutdown
    /// signal would.
    struct CancellingSession;

    #[async_trait]
    impl Session for CancellingSession {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, SessionError> {
            Err(SessionError::Cancelled)
        }
    }

    #[tokio::test]
    async fn test_cancelled_session_is_transport_error() {
        let client = LemmyClient::anonymous(Arc::new(CancellingSession));

        let err = client.site().get().await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.code().is_none());
        assert!(matches!(
            err,
            LemmyError::Transport(TransportError::Session(SessionError::Cancelled))
        ));
    }
}

// =============================================================================
// Broken connections
// =============================================================================

#[cfg(feature = "http")]
mod broken_connection {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_truncated_body_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 512\r\n\r\n{\"site_view\":",
                )
                .await
                .unwrap();
            socket.flush().await.unwrap();
            drop(socket);
        });

        let client = LemmyClient::builder()
            .base_url(&format!("http://{}", addr))
            .build()
            .unwrap();
        let err = client.site().get().await.unwrap_err();
        assert!(err.is_transport(), "expected transport error, got {err:?}");
        assert!(err.code().is_none());

        server.await.unwrap();
    }
}

//! End-to-end tests of `LemmyClient` over the reqwest session.
//!
//! A wiremock server stands in for the Lemmy instance, so the full path
//! from typed form to URL, query, body and back to a typed response is
//! exercised without network access.

#![cfg(feature = "http")]

mod common;

use lemmy_client::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LemmyClient {
    LemmyClient::builder()
        .base_url(&server.uri())
        .build()
        .expect("mock server uri is valid")
}

// =============================================================================
// Request encoding
// =============================================================================

mod request_encoding {
    use super::*;

    #[tokio::test]
    async fn test_get_community_by_name_uses_query_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/community"))
            .and(query_param("name", "anime"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(common::get_community_response(3, "anime")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let resp = client
            .communities()
            .get(&GetCommunity::by_name("anime"))
            .await
            .unwrap();
        assert_eq!(resp.community_view.community.name, "anime");
        assert_eq!(resp.community_view.community.qualified_name(), "anime@lemmy.world");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
        let query = requests[0].url.query().unwrap_or_default();
        assert_eq!(query, "name=anime");
    }

    #[tokio::test]
    async fn test_jwt_only_login_then_authenticated_call_carries_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/user/login"))
            .and(body_partial_json(json!({
                "username_or_email": "alice",
                "password": "hunter22",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt": "abc123"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v3/site"))
            .and(query_param("auth", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(common::site_response()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let jwt = client.auth().login("alice", "hunter22").await.unwrap();
        assert_eq!(jwt.as_str(), "abc123");
        assert!(!client.is_authenticated());

        let client = client.with_credential(jwt);
        let site = client.site().get().await.unwrap();
        assert_eq!(site.version, "0.18.1");
    }

    #[tokio::test]
    async fn test_post_body_is_json_with_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/community/follow"))
            .and(body_partial_json(json!({
                "community_id": 3,
                "follow": true,
                "auth": "abc123",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "community_view": common::community_view(3, "anime"),
                "discussion_languages": [],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).with_credential(Credential::new("abc123"));
        let resp = client.communities().follow(3, true).await.unwrap();
        assert_eq!(resp.community_view.counts.subscribers, 42);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query().is_none());
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("auth").is_some());
    }

    #[tokio::test]
    async fn test_anonymous_login_never_sends_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/user/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt": "fresh"})))
            .mount(&server)
            .await;

        let client = client_for(&server).with_credential(Credential::new("stale"));
        client.auth().login("alice", "hunter22").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("auth").is_none());
    }
}

// =============================================================================
// Error mapping
// =============================================================================

mod error_mapping {
    use super::*;

    #[tokio::test]
    async fn test_error_payload_with_200_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/community"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"error": "couldnt_find_community"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .communities()
            .get(&GetCommunity::by_name("nope"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some("couldnt_find_community"));
        assert_eq!(err.status(), Some(200));
    }

    #[tokio::test]
    async fn test_error_payload_with_400_keeps_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/user/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "incorrect_login"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .auth()
            .login("alice", "wrong")
            .await
            .unwrap_err();
        match err {
            LemmyError::Api { code, status } => {
                assert_eq!(code, "incorrect_login");
                assert_eq!(status, 400);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_without_jwt_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v3/user/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "registration_created": true,
                "verify_email_sent": false,
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .auth()
            .login("alice", "hunter22")
            .await
            .unwrap_err();
        assert!(err.is_decode());
        assert!(err.code().is_none());
    }

    #[tokio::test]
    async fn test_html_gateway_error_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/site"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).site().get().await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.code().is_none());
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/site"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": 18})))
            .mount(&server)
            .await;

        let err = client_for(&server).site().get().await.unwrap_err();
        match err {
            LemmyError::Decode { type_name, .. } => assert_eq!(type_name, "GetSiteResponse"),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_required_auth_fails_before_any_request() {
        let server = MockServer::start().await;

        let err = client_for(&server)
            .posts()
            .save(1, true)
            .await
            .unwrap_err();
        assert!(err.is_auth_required());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

// =============================================================================
// Builder
// =============================================================================

mod builder {
    use super::*;

    #[test]
    fn test_empty_base_url_rejected() {
        let err = LemmyClient::builder().build().unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = LemmyClient::builder()
            .base_url("ftp://lemmy.ml")
            .build()
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_trailing_slash_trimmed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/site"))
            .respond_with(ResponseTemplate::new(200).set_body_json(common::site_response()))
            .expect(1)
            .mount(&server)
            .await;

        let client = LemmyClient::builder()
            .base_url(&format!("{}/", server.uri()))
            .build()
            .unwrap();
        client.site().get().await.unwrap();
    }
}

use nationmind_api::{ApiError, BackendClient, HealthCheck, HealthFailure, HealthPayload, HttpClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// HttpClient tests
// ---------------------------------------------------------------------------

mod http_client {
    use super::*;

    #[test]
    fn new_with_valid_url() {
        let client = HttpClient::new("http://localhost:8000");
        assert!(client.is_ok());
    }

    #[test]
    fn new_with_invalid_url() {
        let result = HttpClient::new("not a url");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = HttpClient::new("http://example.com:9090/backend").unwrap();
        assert_eq!(client.base_url().as_str(), "http://example.com:9090/backend/");
    }

    #[test]
    fn debug_impl_shows_base_url() {
        let client = HttpClient::new("http://example.com:9090/").unwrap();
        let debug = format!("{client:?}");
        assert!(
            debug.contains("http://example.com:9090/"),
            "Debug output should contain base_url, got: {debug}"
        );
        assert!(
            debug.contains("HttpClient"),
            "Debug output should contain struct name, got: {debug}"
        );
    }

    #[tokio::test]
    async fn get_returns_json_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(&server.uri()).unwrap();
        let resp: serde_json::Value = client.get("api/health").await.unwrap();
        assert_eq!(resp["status"], "ok");
    }

    #[tokio::test]
    async fn get_keeps_base_path_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/backend/api/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new(&format!("{}/backend", server.uri())).unwrap();
        let resp: serde_json::Value = client.get("api/health").await.unwrap();
        assert_eq!(resp["status"], "ok");
    }

    #[tokio::test]
    async fn get_returns_api_error_on_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = HttpClient::new(&server.uri()).unwrap();
        let result: Result<serde_json::Value, _> = client.get("api/health").await;
        match result.unwrap_err() {
            ApiError::ApiResponse { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected ApiResponse, got: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// BackendClient tests
// ---------------------------------------------------------------------------

mod backend {
    use super::*;

    #[tokio::test]
    async fn health_decodes_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "message": "Backend funcionando correctamente"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri()).unwrap();
        let payload = client.health().await.unwrap();
        assert_eq!(
            payload,
            HealthPayload {
                status: "ok".into(),
                message: Some("Backend funcionando correctamente".into()),
            }
        );
    }

    #[tokio::test]
    async fn health_check_accepts_payload_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "degraded"})),
            )
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri()).unwrap();
        let payload = client.health_check().await.unwrap();
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.message, None);
    }

    #[tokio::test]
    async fn health_check_collapses_error_status_into_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri()).unwrap();
        let failure = client.health_check().await.unwrap_err();
        assert_eq!(failure.message.as_deref(), Some("API returned 503: maintenance"));
    }

    #[tokio::test]
    async fn health_check_collapses_malformed_body_into_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Healthy"))
            .mount(&server)
            .await;

        let client = BackendClient::new(&server.uri()).unwrap();
        let failure = client.health_check().await.unwrap_err();
        let message = failure.message.expect("decode failures carry a message");
        assert!(
            message.starts_with("HTTP request failed"),
            "unexpected message: {message}"
        );
    }

    #[tokio::test]
    async fn health_check_reports_unreachable_backend() {
        let uri = {
            let server = MockServer::start().await;
            server.uri()
        };

        let client = BackendClient::new(&uri).unwrap();
        let failure = client.health_check().await.unwrap_err();
        assert!(failure.message.is_some());
    }
}

// ---------------------------------------------------------------------------
// HealthFailure tests
// ---------------------------------------------------------------------------

mod failure {
    use super::*;

    #[test]
    fn empty_message_is_treated_as_absent() {
        assert_eq!(HealthFailure::with_message(""), HealthFailure::without_message());
    }

    #[test]
    fn api_error_text_becomes_message() {
        let err = ApiError::ApiResponse {
            status: 404,
            body: "Not Found".into(),
        };
        let failure = HealthFailure::from(err);
        assert_eq!(failure.message.as_deref(), Some("API returned 404: Not Found"));
    }
}

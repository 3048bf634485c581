//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the client configuration, request building,
//! response parsing, and error handling behavior.

use monday_async::clients::{
    FileUpload, HttpClient, HttpError, HttpRequest, InvalidHttpRequestError, RequestBody,
};
use monday_async::{ApiToken, EndpointUrl, MondayConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> MondayConfig {
    MondayConfig::builder()
        .api_token(ApiToken::new("secret-token").unwrap())
        .endpoint(EndpointUrl::new(format!("{}/v2", server.uri())).unwrap())
        .user_agent_prefix("my-app/1.0")
        .header("X-Trace", "abc")
        .build()
        .unwrap()
}

fn create_client(config: &MondayConfig) -> HttpClient {
    HttpClient::new(config.endpoint(), config, reqwest::Client::new())
}

// ============================================================================
// Integration Tests
// ============================================================================

#[tokio::test]
async fn test_full_workflow_config_to_client_to_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(header("Authorization", "secret-token"))
        .and(header("Accept", "application/json"))
        .and(header("X-Trace", "abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-1")
                .set_body_json(json!({"data": {"me": {"id": "1"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = create_config(&server);
    let client = create_client(&config);
    assert!(client.default_headers()["User-Agent"].starts_with("my-app/1.0 | monday-async v"));

    let request = HttpRequest::builder()
        .json(json!({"query": "query { me { id } }"}))
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.request_id(), Some("req-1"));
    assert_eq!(response.body["data"]["me"]["id"], "1");
}

#[tokio::test]
async fn test_invalid_request_produces_correct_error() {
    let result = HttpRequest::builder().build();
    assert!(matches!(result, Err(InvalidHttpRequestError::MissingBody)));

    let request = HttpRequest {
        body: Some(RequestBody::Json(json!({"query": "   "}))),
        extra_headers: None,
        tries: 1,
    };
    assert!(matches!(
        request.verify(),
        Err(InvalidHttpRequestError::EmptyQuery)
    ));
}

#[tokio::test]
async fn test_non_2xx_response_keeps_body_and_reference() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(json!({"error_message": "Forbidden", "status_code": 403})),
        )
        .mount(&server)
        .await;

    let config = create_config(&server);
    let client = create_client(&config);
    let request = HttpRequest::builder()
        .json(json!({"query": "query { me { id } }"}))
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert_eq!(error.status_code(), Some(403));

    let HttpError::Response(response_error) = error else {
        panic!("expected a response error");
    };
    assert_eq!(response_error.error_reference.as_deref(), Some("req-42"));
    assert_eq!(response_error.body["error_message"], "Forbidden");
    assert!(response_error.message.contains("req-42"));
}

#[tokio::test]
async fn test_server_error_is_retried_after_fixed_delay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let config = create_config(&server);
    let client = create_client(&config);
    let request = HttpRequest::builder()
        .json(json!({"query": "query { me { id } }"}))
        .tries(2)
        .build()
        .unwrap();

    let started = std::time::Instant::now();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_timeout_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!({"data": {}})),
        )
        .mount(&server)
        .await;

    let config = MondayConfig::builder()
        .api_token(ApiToken::new("secret-token").unwrap())
        .endpoint(EndpointUrl::new(format!("{}/v2", server.uri())).unwrap())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let client = create_client(&config);
    let request = HttpRequest::builder()
        .json(json!({"query": "query { me { id } }"}))
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)));
}

#[tokio::test]
async fn test_non_json_success_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_config(&server);
    let client = create_client(&config);
    let request = HttpRequest::builder()
        .json(json!({"query": "query { me { id } }"}))
        .tries(3)
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    match error {
        HttpError::InvalidJson { code, body, .. } => {
            assert_eq!(code, 200);
            assert_eq!(body, "<html>gateway</html>");
        }
        other => panic!("expected InvalidJson, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_success_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let config = create_config(&server);
    let client = create_client(&config);
    let request = HttpRequest::builder()
        .json(json!({"query": "query { me { id } }"}))
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(error, HttpError::InvalidJson { code: 200, .. }));
}

/// Serves one response that promises more body bytes than it sends.
fn serve_truncated_body() -> String {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        let mut buffer = [0_u8; 1024];
        loop {
            let read = stream.read(&mut buffer).unwrap();
            received.extend_from_slice(&buffer[..read]);
            let text = String::from_utf8_lossy(&received).to_lowercase();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if received.len() >= end + 4 + length {
                    break;
                }
            }
            if read == 0 {
                break;
            }
        }
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"data\"",
            )
            .unwrap();
    });
    format!("http://{address}/v2")
}

#[tokio::test]
async fn test_body_read_failure_is_a_network_error() {
    let config = MondayConfig::builder()
        .api_token(ApiToken::new("secret-token").unwrap())
        .endpoint(EndpointUrl::new(serve_truncated_body()).unwrap())
        .build()
        .unwrap();
    let client = create_client(&config);
    let request = HttpRequest::builder()
        .json(json!({"query": "query { me { id } }"}))
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(error, HttpError::Network(_)), "got {error:?}");
}

#[test]
fn test_file_upload_debug_hides_content() {
    let upload = FileUpload {
        query: "mutation ($file: File!) { add_file_to_update (update_id: 1, file: $file) { id } }"
            .to_string(),
        file_name: "secret.txt".to_string(),
        content: b"do not print me".to_vec(),
    };
    let debug = format!("{upload:?}");
    assert!(debug.contains("content_len: 15"));
    assert!(!debug.contains("do not print me"));
}

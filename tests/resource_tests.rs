//! Integration tests for the resource facades of [`MondayClient`].
//!
//! Each test drives a resource method against a local mock server and
//! checks the document that reaches the wire and the response handed back.

use monday_async::graphql::queries::{BoardListParams, ItemFields};
use monday_async::graphql::types::BaseRoleName;
use monday_async::{
    ApiToken, ApiVersion, EndpointUrl, GraphqlError, Id, MondayClient, MondayConfig,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client whose endpoints point at the mock server.
fn create_client(server: &MockServer) -> MondayClient {
    let config = MondayConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .api_version(ApiVersion::V2024_10)
        .endpoint(EndpointUrl::new(format!("{}/v2", server.uri())).unwrap())
        .file_endpoint(EndpointUrl::new(format!("{}/v2/file", server.uri())).unwrap())
        .build()
        .unwrap();
    MondayClient::with_http_client(&config, reqwest::Client::new())
}

/// Mounts a mock answering any request to `/v2` containing `needle`.
async fn respond_to(server: &MockServer, needle: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(body_string_contains(needle))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Read Resource Tests
// ============================================================================

#[tokio::test]
async fn test_users_get_me() {
    let server = MockServer::start().await;
    respond_to(
        &server,
        "me {",
        json!({"data": {"me": {"id": "1", "name": "Ada"}}, "account_id": 9}),
    )
    .await;

    let client = create_client(&server);
    let response = client.users.get_me(false).await.unwrap();

    assert_eq!(response.data()["me"]["name"], "Ada");
    assert_eq!(response.account_id(), Some(9));
}

#[tokio::test]
async fn test_boards_get_boards_with_complexity() {
    let server = MockServer::start().await;
    respond_to(
        &server,
        "boards(ids: [5]",
        json!({"data": {
            "complexity": {"before": 100, "query": 10, "after": 90, "reset_in_x_seconds": 30},
            "boards": [{"id": "5", "name": "Roadmap"}]
        }}),
    )
    .await;

    let client = create_client(&server);
    let params = BoardListParams {
        ids: vec![Id::from(5_u64)],
        ..Default::default()
    };
    let response = client.boards.get_boards(&params, true).await.unwrap();

    assert_eq!(response.data()["boards"][0]["name"], "Roadmap");
    let complexity = response.complexity().unwrap();
    assert_eq!(complexity.query, 10);
    assert_eq!(complexity.after, 90);
}

#[tokio::test]
async fn test_items_next_page_sends_cursor() {
    let server = MockServer::start().await;
    respond_to(
        &server,
        "next_items_page(",
        json!({"data": {"next_items_page": {"cursor": null, "items": []}}}),
    )
    .await;

    let client = create_client(&server);
    let response = client
        .items
        .next_items_page("MSw5NzI4MDA5MDAsaV9YcmxJb0p1VEdYc1VWeGlxeF9kLDg4MiwzNXw0MTQ1NzU1MTE5", 50, ItemFields::minimal(), false)
        .await
        .unwrap();

    assert!(response.data()["next_items_page"]["cursor"].is_null());
    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("limit: 50"));
    assert!(body.contains("MSw5NzI4MDA5MDAsaV9YcmxJb0p1VEdYc1VWeGlxeF9kLDg4MiwzNXw0MTQ1NzU1MTE5"));
}

#[tokio::test]
async fn test_complexity_resource() {
    let server = MockServer::start().await;
    respond_to(
        &server,
        "reset_in_x_seconds",
        json!({"data": {"complexity": {"before": 5000000, "query": 1, "after": 4999999, "reset_in_x_seconds": 60}}}),
    )
    .await;

    let client = create_client(&server);
    let response = client.complexity.get_complexity().await.unwrap();

    assert_eq!(response.complexity().unwrap().before, 5_000_000);
}

#[tokio::test]
async fn test_users_get_me_rejects_html_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.users.get_me(false).await.unwrap_err();

    assert!(matches!(
        error,
        GraphqlError::Http(monday_async::clients::HttpError::InvalidJson { .. })
    ));
}

// ============================================================================
// Mutation Resource Tests
// ============================================================================

#[tokio::test]
async fn test_items_delete_item() {
    let server = MockServer::start().await;
    respond_to(
        &server,
        "delete_item(item_id: 42)",
        json!({"data": {"delete_item": {"id": "42", "name": "Old task"}}}),
    )
    .await;

    let client = create_client(&server);
    let response = client.items.delete_item(42_u64, false).await.unwrap();

    assert_eq!(response.data()["delete_item"]["id"], "42");
}

#[tokio::test]
async fn test_users_update_role_reports_partial_errors_as_data() {
    let server = MockServer::start().await;
    respond_to(
        &server,
        "new_role: ADMIN",
        json!({"data": {"update_users_role": {
            "updated_users": [{"id": "1"}],
            "errors": [{"message": "cannot change own role", "code": "CANNOT_UPDATE_SELF", "user_id": 2}]
        }}}),
    )
    .await;

    let client = create_client(&server);
    let response = client
        .users
        .update_users_role(&[Id::from(1_u64), Id::from(2_u64)], BaseRoleName::Admin, false)
        .await
        .unwrap();

    assert_eq!(
        response.data()["update_users_role"]["errors"][0]["code"],
        "CANNOT_UPDATE_SELF"
    );
}

#[tokio::test]
async fn test_mutation_error_body_is_returned_as_api_error() {
    let server = MockServer::start().await;
    respond_to(
        &server,
        "archive_item(",
        json!({
            "error_code": "ResourceNotFoundException",
            "error_message": "Item not found",
            "status_code": 200
        }),
    )
    .await;

    let client = create_client(&server);
    let error = client.items.archive_item(404_u64, false).await.unwrap_err();

    let api_error = error.api_error().unwrap();
    assert_eq!(api_error.error_code.as_deref(), Some("ResourceNotFoundException"));
    assert!(api_error.message.contains("Item not found"));
}

// ============================================================================
// Custom Query Tests
// ============================================================================

#[tokio::test]
async fn test_custom_query_with_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(header("Authorization", "test-token"))
        .and(body_string_contains("\"variables\":{\"ids\":[1]}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"items": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .custom
        .execute_custom_query(
            "query ($ids: [ID!]) { items (ids: $ids) { id } }",
            Some(json!({"ids": [1]})),
        )
        .await
        .unwrap();

    assert_eq!(response.data()["items"], json!([]));
}

#[tokio::test]
async fn test_custom_query_syntax_error_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .custom
        .execute_custom_query("query { items { id }", None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::Syntax(_)));
}

// ============================================================================
// File Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_file_to_column() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/file"))
        .and(header("API-Version", "2024-10"))
        .and(body_string_contains("add_file_to_column"))
        .and(body_string_contains("filename=\"report.txt\""))
        .and(body_string_contains("quarterly numbers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"add_file_to_column": {"id": "77", "name": "report.txt"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = std::env::temp_dir().join(format!("monday-async-resource-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let file = dir.join("report.txt");
    tokio::fs::write(&file, "quarterly numbers").await.unwrap();

    let client = create_client(&server);
    let response = client
        .items
        .upload_file_to_column(1_u64, "files", &file, false)
        .await
        .unwrap();

    assert_eq!(response.data()["add_file_to_column"]["id"], "77");
    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_add_file_to_update_missing_file() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    let error = client
        .updates
        .add_file_to_update(1_u64, "/definitely/not/here.txt", false)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::FileRead { .. }));
}

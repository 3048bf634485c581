//! Integration tests for API version management.

use monday_async::{ApiToken, ApiVersion, ConfigError, GraphqlClient, MondayConfig};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Version Lifecycle Tests
// =============================================================================

#[test]
fn test_known_versions_are_chronological() {
    let versions = ApiVersion::known_versions();

    assert!(!versions.is_empty(), "Should have known versions");
    assert!(versions.contains(&ApiVersion::latest()));
    assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(versions.last(), Some(&ApiVersion::latest()));
    assert!(versions.iter().all(ApiVersion::is_known));
}

#[test]
fn test_minimum_supported_version() {
    let minimum = ApiVersion::minimum_supported();

    assert!(minimum.is_supported());
    assert!(!minimum.is_deprecated());
    assert!(ApiVersion::latest() > minimum);
}

#[test]
fn test_deprecated_versions() {
    assert!(ApiVersion::V2023_10.is_deprecated());
    assert!(!ApiVersion::V2023_10.is_supported());
    assert!(!ApiVersion::default().is_deprecated());
}

#[test]
fn test_custom_versions_interleave_with_known_versions() {
    let custom: ApiVersion = "2026-01".parse().unwrap();

    assert_eq!(custom, ApiVersion::Custom("2026-01".to_string()));
    assert!(!custom.is_known());
    assert!(custom > ApiVersion::latest());
    assert!(custom.is_supported());

    let old: ApiVersion = "2022-10".parse().unwrap();
    assert!(old.is_deprecated());
}

#[test]
fn test_version_strings_must_be_quarterly() {
    for bad in ["2024-02", "24-04", "2024/04", "", "20x4-01"] {
        let result: Result<ApiVersion, _> = bad.parse();
        assert!(
            matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_version_round_trips_through_display() {
    for version in ApiVersion::known_versions() {
        let parsed: ApiVersion = version.to_string().parse().unwrap();
        assert_eq!(parsed, version);
    }
}

// =============================================================================
// Header Tests
// =============================================================================

#[tokio::test]
async fn test_configured_version_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("API-Version", "2024-07"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = MondayConfig::builder()
        .api_token(ApiToken::new("token").unwrap())
        .api_version(ApiVersion::V2024_07)
        .endpoint(monday_async::EndpointUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = GraphqlClient::new(&config, reqwest::Client::new());

    client.execute("query { version { value } }", None).await.unwrap();
}

#[tokio::test]
async fn test_custom_version_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("API-Version", "2026-04"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = MondayConfig::builder()
        .api_token(ApiToken::new("token").unwrap())
        .api_version("2026-04".parse().unwrap())
        .endpoint(monday_async::EndpointUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = GraphqlClient::new(&config, reqwest::Client::new());

    assert_eq!(client.api_version().as_str(), "2026-04");
    client.execute("query { version { value } }", None).await.unwrap();
}

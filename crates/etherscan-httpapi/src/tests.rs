//! Tests for the Etherscan HTTP client.

use etherscan_marshal::{Field, WireMap};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{ApiConfig, CallParams, RequestParams};

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_default_config() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "https://api.etherscan.io");
    assert!(config.api_key.is_empty());
    assert!(config.timeout.is_none());
}

#[tokio::test]
async fn test_get_sends_fixed_and_extra_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("module", "account"))
        .and(query_param("action", "balance"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("address", "0xabc"))
        .and(query_param("tag", "latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "1",
            "message": "OK",
            "result": "40891626854930000000000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut params = WireMap::new();
    params.insert("address".to_string(), "0xabc".to_string());
    params.insert("tag".to_string(), "latest".to_string());

    let result = client
        .get(RequestParams {
            module: "account".to_string(),
            action: "balance".to_string(),
            params,
        })
        .await
        .unwrap();

    assert_eq!(result, serde_json::json!("40891626854930000000000"));
}

#[tokio::test]
async fn test_call_marshals_and_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("module", "block"))
        .and(query_param("action", "getblocknobytime"))
        .and(query_param("timestamp", "1578638524"))
        .and(query_param("closest", "before"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "1",
            "message": "OK",
            "result": "9251482"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let timestamp = 1_578_638_524i64;
    let closest = "before";
    let request = [
        Field::new("Timestamp", "", &timestamp),
        Field::new("Closest", "", &closest),
    ];

    let block: u64 = client
        .call(CallParams::new("block", "getblocknobytime").request(&request))
        .await
        .unwrap();

    assert_eq!(block, 9_251_482);
}

#[tokio::test]
async fn test_call_with_hex_directive_and_no_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("action", "eth_blockNumber"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 83,
            "result": "0xc36b29"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let block: u64 = client
        .call(CallParams::new("proxy", "eth_blockNumber").directive(",hex"))
        .await
        .unwrap();

    assert_eq!(block, 0xc36b29);
}

#[tokio::test]
async fn test_envelope_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .call::<u64>(CallParams::new("stats", "ethsupply"))
        .await
        .unwrap_err();

    match err {
        ApiError::Response {
            status,
            message,
            result,
        } => {
            assert_eq!(status, "0");
            assert_eq!(message, "NOTOK");
            assert_eq!(result, "Invalid API Key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rpc_error_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("module", "proxy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {
                "code": -32602,
                "message": "invalid argument 0: hex string has length 0, want 40 for common.Address"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .call::<u64>(CallParams::new("proxy", "eth_getTransactionCount").directive(",hex"))
        .await
        .unwrap_err();

    match err {
        ApiError::Rpc { code, message } => {
            assert_eq!(code, -32602);
            assert!(message.starts_with("invalid argument 0"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let raw = client
        .get(RequestParams {
            module: "proxy".to_string(),
            action: "eth_getTransactionCount".to_string(),
            params: WireMap::new(),
        })
        .await;
    assert!(matches!(raw, Err(ApiError::Rpc { code: -32602, .. })));
}

#[tokio::test]
async fn test_http_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .call::<u64>(CallParams::new("stats", "ethsupply"))
        .await
        .unwrap_err();

    match err {
        ApiError::Status {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .call::<u64>(CallParams::new("stats", "ethsupply"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Serialization(_)));
}

#[tokio::test]
async fn test_unmarshal_error_names_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "1",
            "message": "OK",
            "result": "not-a-number"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .call::<u64>(CallParams::new("stats", "ethsupply"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unmarshal(_)));
}

#[tokio::test]
async fn test_empty_result_is_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "1",
            "message": "OK",
            "result": ""
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let value: u64 = client
        .call(CallParams::new("stats", "ethsupply"))
        .await
        .unwrap();

    assert_eq!(value, 0);
}

#[test]
fn test_trailing_slash_in_base_url() {
    let client = ApiClient::with_http_client(
        ApiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        },
        reqwest::Client::new(),
    );
    assert_eq!(client.api_url(), "http://localhost:8080/api");
}

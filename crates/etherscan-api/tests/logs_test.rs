//! Tests for the `logs` module client.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use etherscan_api::logs::{ComparisonOperator, LogsBlockParam, LogsRequest, TopicComparison};
use etherscan_api::LogsClient;
use etherscan_httpapi::{ApiClient, ApiConfig, ApiError};
use etherscan_marshal::{Address, Hash};
use num_bigint::BigInt;
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONTRACT: &str = "0x33990122638b9132ca29c723bdf037f1a891a70c";
const TOPIC0: &str = "0xf63780e752c6a54a94fc52715dbc5518a3b4c3c2833d301a204226548a2a8545";
const TOPIC1: &str = "0x72657075746174696f6e00000000000000000000000000000000000000000000";

fn logs(server: &MockServer) -> LogsClient {
    let api = ApiClient::new(ApiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..Default::default()
    })
    .unwrap();
    LogsClient::new(Arc::new(api))
}

fn request() -> LogsRequest {
    LogsRequest {
        from_block: LogsBlockParam::Number(379_224),
        to_block: LogsBlockParam::Latest,
        address: CONTRACT.parse().unwrap(),
        topics: vec![TOPIC0.parse().unwrap(), TOPIC1.parse().unwrap()],
        comparisons: vec![TopicComparison {
            topics: [0, 1],
            operator: ComparisonOperator::And,
        }],
    }
}

#[tokio::test]
async fn test_get_logs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("module", "logs"))
        .and(query_param("action", "getLogs"))
        .and(query_param("fromBlock", "379224"))
        .and(query_param("toBlock", "latest"))
        .and(query_param("address", CONTRACT))
        .and(query_param("topic0", TOPIC0))
        .and(query_param("topic1", TOPIC1))
        .and(query_param("topic0_1_opr", "and"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "message": "OK",
            "result": [{
                "address": CONTRACT,
                "topics": [TOPIC0, TOPIC1],
                "data": "0x",
                "blockNumber": "0x5c958",
                "timeStamp": "0x561d688c",
                "gasPrice": "0xba43b7400",
                "gasUsed": "0x10682",
                "logIndex": "0x",
                "transactionHash": "0x0b03498648ae2da924f961dda00dc6bb0a8df15519262b7e012b7d67f4bb7e83",
                "transactionIndex": "0x"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = logs(&server).get_logs(&request()).await.unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.address, CONTRACT.parse::<Address>().unwrap());
    assert_eq!(entry.block_number, 379_224);
    assert_eq!(entry.timestamp, Utc.timestamp_opt(0x561d688c, 0).unwrap());
    assert_eq!(entry.gas_price, BigInt::from(50_000_000_000u64));
    assert_eq!(entry.gas_used, BigInt::from(67_202u64));
    assert_eq!(entry.log_index, 0);
    assert_eq!(entry.transaction_index, 0);
    assert!(entry.data.is_empty());
    assert_eq!(entry.topics, vec![TOPIC0.parse::<Hash>().unwrap(), TOPIC1.parse().unwrap()]);
}

#[tokio::test]
async fn test_get_logs_rejects_too_many_topics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut req = request();
    req.topics = vec![Hash::default(); 5];
    let err = logs(&server).get_logs(&req).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_get_logs_rejects_descending_comparison() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut req = request();
    req.comparisons = vec![TopicComparison {
        topics: [2, 1],
        operator: ComparisonOperator::Or,
    }];
    let err = logs(&server).get_logs(&req).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

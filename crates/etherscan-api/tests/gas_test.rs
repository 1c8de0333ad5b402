//! Tests for the `gastracker` module client.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use etherscan_api::{DateRange, GasClient, SortingPreference};
use etherscan_httpapi::{ApiClient, ApiConfig};
use num_bigint::BigInt;
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gas(server: &MockServer) -> GasClient {
    let api = ApiClient::new(ApiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..Default::default()
    })
    .unwrap();
    GasClient::new(Arc::new(api))
}

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "1",
        "message": "OK",
        "result": result
    }))
}

fn february_2019() -> DateRange {
    DateRange {
        start_date: Utc.with_ymd_and_hms(2019, 2, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2019, 2, 28, 0, 0, 0).unwrap(),
        sort: SortingPreference::Desc,
    }
}

#[tokio::test]
async fn test_estimate_confirmation_time_sends_wei() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("module", "gastracker"))
        .and(query_param("action", "gasestimate"))
        .and(query_param("gasprice", "2000000000"))
        .respond_with(ok(json!("9227")))
        .expect(1)
        .mount(&server)
        .await;

    let seconds = gas(&server).estimate_confirmation_time(2).await.unwrap();

    assert_eq!(seconds, 9227);
}

#[tokio::test]
async fn test_get_gas_oracle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "gasoracle"))
        .respond_with(ok(json!({
            "LastBlock": "13053741",
            "SafeGasPrice": "20",
            "ProposeGasPrice": "22",
            "FastGasPrice": "24",
            "suggestBaseFee": "19.230609716",
            "gasUsedRatio": "0.370119078777807,0.8954731,0.550911766666667,0.212457033333333,0.552463633333333"
        })))
        .mount(&server)
        .await;

    let oracle = gas(&server).get_gas_oracle().await.unwrap();

    assert_eq!(oracle.last_block, 13_053_741);
    assert_eq!(oracle.safe_gas_price, 20);
    assert_eq!(oracle.propose_gas_price, 22);
    assert_eq!(oracle.fast_gas_price, 24);
    assert_eq!(oracle.suggest_base_fee, 19.230609716);
    assert_eq!(oracle.gas_used_ratio.len(), 5);
    assert_eq!(oracle.gas_used_ratio[1], 0.8954731);
}

#[tokio::test]
async fn test_daily_gas_stats_use_stats_module() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("module", "stats"))
        .and(query_param("action", "dailyavggasprice"))
        .and(query_param("startdate", "2019-02-01"))
        .and(query_param("enddate", "2019-02-28"))
        .and(query_param("sort", "desc"))
        .respond_with(ok(json!([{
            "UTCDate": "2019-02-28",
            "unixTimeStamp": "1551312000",
            "maxGasPrice_Wei": "150000000000000",
            "minGasPrice_Wei": "0",
            "avgGasPrice_Wei": "17262190224"
        }])))
        .mount(&server)
        .await;

    let prices = gas(&server)
        .get_daily_avg_gas_price(&february_2019())
        .await
        .unwrap();

    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].timestamp, Utc.with_ymd_and_hms(2019, 2, 28, 0, 0, 0).unwrap());
    assert_eq!(prices[0].max_gas_price, BigInt::from(150_000_000_000_000u64));
    assert_eq!(prices[0].min_gas_price, BigInt::from(0));
    assert_eq!(prices[0].avg_gas_price, BigInt::from(17_262_190_224u64));
}

#[tokio::test]
async fn test_get_daily_total_gas_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "dailygasused"))
        .respond_with(ok(json!([{
            "UTCDate": "2019-02-01",
            "unixTimeStamp": "1548979200",
            "gasUsed": "32761450415"
        }])))
        .mount(&server)
        .await;

    let used = gas(&server)
        .get_daily_total_gas_used(&february_2019())
        .await
        .unwrap();

    assert_eq!(used[0].gas_used, BigInt::from(32_761_450_415u64));
}

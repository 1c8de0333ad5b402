//! Tests for the `contract` module client.

use std::sync::Arc;

use etherscan_api::ContractsClient;
use etherscan_httpapi::{ApiClient, ApiConfig, ApiError};
use etherscan_marshal::Address;
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DAO: &str = "0xbb9bc244d798123fde783fcc1c72d3bb8c189413";

fn contracts(server: &MockServer) -> ContractsClient {
    let api = ApiClient::new(ApiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..Default::default()
    })
    .unwrap();
    ContractsClient::new(Arc::new(api))
}

fn dao() -> Address {
    DAO.parse().unwrap()
}

#[tokio::test]
async fn test_get_contract_abi() {
    let server = MockServer::start().await;
    let abi = r#"[{"constant":true,"inputs":[],"name":"totalSupply","outputs":[{"name":"","type":"uint256"}],"type":"function"}]"#;
    Mock::given(method("GET"))
        .and(query_param("module", "contract"))
        .and(query_param("action", "getabi"))
        .and(query_param("address", DAO))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "message": "OK",
            "result": abi
        })))
        .mount(&server)
        .await;

    let result = contracts(&server).get_contract_abi(dao()).await.unwrap();

    assert_eq!(result, abi);
}

#[tokio::test]
async fn test_get_contract_source_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "getsourcecode"))
        .and(query_param("address", DAO))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "message": "OK",
            "result": [{
                "SourceCode": "contract DAO {}",
                "ABI": "[]",
                "ContractName": "DAO",
                "CompilerVersion": "v0.3.1-2016-04-12-3ad5e82",
                "OptimizationUsed": "1",
                "Runs": "200",
                "ConstructorArguments": "000000000000000000000000da4a4626d3e16e094de3225a751aab7128e96526",
                "EVMVersion": "Default",
                "Library": "",
                "LicenseType": "",
                "Proxy": "0",
                "Implementation": "",
                "SwarmSource": ""
            }]
        })))
        .mount(&server)
        .await;

    let infos = contracts(&server).get_contract_source_code(dao()).await.unwrap();

    assert_eq!(infos.len(), 1);
    let info = &infos[0];
    assert_eq!(info.contract_name, "DAO");
    assert_eq!(info.compiler_version, "v0.3.1-2016-04-12-3ad5e82");
    assert_eq!(info.optimization_used, "1");
    assert_eq!(info.runs, 200);
    assert_eq!(info.evm_version, "Default");
    assert!(!info.proxy);
    assert!(info.implementation.is_empty());
}

#[tokio::test]
async fn test_unverified_contract_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "getabi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Contract source code not verified"
        })))
        .mount(&server)
        .await;

    let err = contracts(&server).get_contract_abi(dao()).await.unwrap_err();

    match err {
        ApiError::Response { message, result, .. } => {
            assert_eq!(message, "NOTOK");
            assert_eq!(result, "Contract source code not verified");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

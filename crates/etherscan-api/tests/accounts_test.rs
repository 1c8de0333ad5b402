//! Tests for the `account` module client.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use etherscan_api::accounts::{
    BlockType, EthBalanceRequest, ListBlocksRequest, ListNftTransfersRequest, ListTxRequest,
    MultiEthBalancesRequest, TokenTransfersRequest,
};
use etherscan_api::{AccountsClient, SortingPreference};
use etherscan_httpapi::{ApiClient, ApiConfig, ApiError};
use etherscan_marshal::{Address, Hash};
use num_bigint::BigInt;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn accounts(server: &MockServer) -> AccountsClient {
    let api = ApiClient::new(ApiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..Default::default()
    })
    .unwrap();
    AccountsClient::new(Arc::new(api))
}

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "1",
        "message": "OK",
        "result": result
    }))
}

fn addr(s: &str) -> Address {
    s.parse().unwrap()
}

async fn received_query_keys(server: &MockServer) -> Vec<String> {
    let requests = server.received_requests().await.unwrap();
    requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect()
}

#[tokio::test]
async fn test_get_eth_balance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("module", "account"))
        .and(query_param("action", "balance"))
        .and(query_param("address", "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"))
        .and(query_param("tag", "latest"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ok(json!("40891626854930000000000")))
        .expect(1)
        .mount(&server)
        .await;

    let balance = accounts(&server)
        .get_eth_balance(&EthBalanceRequest {
            address: addr("0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(balance, "40891626854930000000000".parse::<BigInt>().unwrap());
}

#[tokio::test]
async fn test_get_multi_eth_balances_joins_addresses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "balancemulti"))
        .and(query_param(
            "address",
            "0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a,0x63a9975ba31b0b9626b34300f7f627147df1f526",
        ))
        .respond_with(ok(json!([
            {"account": "0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a", "balance": "40891626854930000000000"},
            {"account": "0x63a9975ba31b0b9626b34300f7f627147df1f526", "balance": "332567136222827062478"}
        ])))
        .mount(&server)
        .await;

    let balances = accounts(&server)
        .get_multi_eth_balances(&MultiEthBalancesRequest {
            addresses: vec![
                addr("0xddbd2b932c763ba5b1b7ae3b362eac3e8d40121a"),
                addr("0x63a9975ba31b0b9626b34300f7f627147df1f526"),
            ],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[1].account, addr("0x63a9975ba31b0b9626b34300f7f627147df1f526"));
    assert_eq!(balances[1].balance, BigInt::from(332_567_136_222_827_062_478u128));
}

#[tokio::test]
async fn test_list_normal_transactions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "txlist"))
        .and(query_param("address", "0xc5102fe9359fd9a28f877a67e36b0f050d81a3cc"))
        .and(query_param("startblock", "0"))
        .and(query_param("endblock", "99999999"))
        .and(query_param("page", "1"))
        .and(query_param("offset", "10"))
        .and(query_param("sort", "desc"))
        .respond_with(ok(json!([{
            "blockNumber": "14923678",
            "timeStamp": "1654646411",
            "hash": "0xc52783ad354aecc04c670047754f062e3d6d04e8f5b24774472651f9c3882c60",
            "nonce": "1",
            "blockHash": "0x7e1638fd2c6bdd05ffd83c1cf06c63e2f67d0f802084bef076d06bdcf86d1bb0",
            "transactionIndex": "61",
            "from": "0x9aa99c23f67c81701c772b106b4f83f6e858dd2e",
            "to": "",
            "value": "0",
            "gas": "6000000",
            "gasPrice": "83924748773",
            "isError": "0",
            "txreceipt_status": "1",
            "input": "0x60806040",
            "contractAddress": "0xc5102fe9359fd9a28f877a67e36b0f050d81a3cc",
            "cumulativeGasUsed": "10450178",
            "gasUsed": "4457269",
            "confirmations": "122485"
        }])))
        .mount(&server)
        .await;

    let txs = accounts(&server)
        .list_normal_transactions(&ListTxRequest {
            address: addr("0xc5102fe9359fd9a28f877a67e36b0f050d81a3cc"),
            end_block: 99_999_999,
            page: Some(1),
            offset: Some(10),
            sort: SortingPreference::Desc,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(txs.len(), 1);
    let tx = &txs[0];
    assert_eq!(tx.info.block_number, 14_923_678);
    assert_eq!(tx.info.timestamp, Utc.timestamp_opt(1_654_646_411, 0).unwrap());
    assert!(tx.info.to.is_zero());
    assert_eq!(
        tx.info.contract_address,
        Some(addr("0xc5102fe9359fd9a28f877a67e36b0f050d81a3cc"))
    );
    assert_eq!(tx.info.input.0, vec![0x60, 0x80, 0x60, 0x40]);
    assert!(!tx.info.is_error);
    assert_eq!(tx.nonce, 1);
    assert_eq!(tx.gas_price, BigInt::from(83_924_748_773u64));
    assert_eq!(tx.tx_receipt_status, "1");
    assert_eq!(tx.confirmations, 122_485);
}

#[tokio::test]
async fn test_list_transactions_omits_unset_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "txlistinternal"))
        .respond_with(ok(json!([])))
        .mount(&server)
        .await;

    let txs = accounts(&server)
        .list_internal_transactions(&ListTxRequest {
            address: addr("0x2c1ba59d6f58433fb1eaee7d20b26ed83bda51a3"),
            end_block: 2_702_578,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(txs.is_empty());

    let keys = received_query_keys(&server).await;
    assert!(keys.contains(&"startblock".to_string()));
    assert!(!keys.contains(&"page".to_string()));
    assert!(!keys.contains(&"offset".to_string()));
}

#[tokio::test]
async fn test_get_internal_txs_by_hash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "txlistinternal"))
        .and(query_param(
            "txhash",
            "0x40eb908387324f2b575b4879cd9d7188f69c8fc9d87c901b9e2daaea4b442170",
        ))
        .respond_with(ok(json!([{
            "blockNumber": "1743059",
            "timeStamp": "1466489498",
            "from": "0x2cac6e4b11d6b58f6d3c1c9d5fe8faa89f60e5a2",
            "to": "0x66a1c3eaf0f1ffc28d209c0763ed0ca614f3b002",
            "value": "7106740000000000",
            "contractAddress": "",
            "input": "",
            "type": "call",
            "gas": "2300",
            "gasUsed": "0",
            "isError": "0",
            "errCode": ""
        }])))
        .mount(&server)
        .await;

    let hash: Hash = "0x40eb908387324f2b575b4879cd9d7188f69c8fc9d87c901b9e2daaea4b442170"
        .parse()
        .unwrap();
    let txs = accounts(&server).get_internal_txs_by_hash(hash).await.unwrap();

    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].kind, "call");
    assert_eq!(txs[0].info.value, BigInt::from(7_106_740_000_000_000u64));
    assert_eq!(txs[0].info.contract_address, None);
    assert!(txs[0].info.input.is_empty());
}

#[tokio::test]
async fn test_list_token_transfers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "tokentx"))
        .and(query_param("contractaddress", "0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2"))
        .respond_with(ok(json!([{
            "blockNumber": "4730207",
            "timeStamp": "1513240363",
            "hash": "0xe8c208398bd5ae8e4c237658580db56a2a94dfa0ca382c99b776fa6e7d31d5b4",
            "nonce": "406",
            "blockHash": "0x022c5e6a3d2487a8ccf8946a2ffb74938bf8e5c8a3f6d91b41c56378a02b5ab9",
            "from": "0x642ae78fafbb8032da552d619ad43f1d81e4dd7c",
            "contractAddress": "0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2",
            "to": "0x4e83362442b8d1bec281594cea3050c8eb01311c",
            "value": "5901522149285533025181",
            "tokenName": "Maker",
            "tokenSymbol": "MKR",
            "tokenDecimal": "18",
            "transactionIndex": "81",
            "gas": "940000",
            "gasPrice": "32010000000",
            "gasUsed": "77759",
            "cumulativeGasUsed": "2523379",
            "input": "deprecated",
            "confirmations": "7968350"
        }])))
        .mount(&server)
        .await;

    let transfers = accounts(&server)
        .list_token_transfers(&TokenTransfersRequest {
            contract_address: addr("0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2"),
            address: addr("0x4e83362442b8d1bec281594cea3050c8eb01311c"),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(transfers.len(), 1);
    let transfer = &transfers[0];
    assert_eq!(transfer.base.token_symbol, "MKR");
    assert_eq!(transfer.base.token_decimal, 18);
    assert_eq!(transfer.base.transaction_index, 81);
    assert_eq!(
        transfer.value,
        "5901522149285533025181".parse::<BigInt>().unwrap()
    );
}

#[tokio::test]
async fn test_list_nft_transfers_requires_a_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ok(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let err = accounts(&server)
        .list_nft_transfers(&ListNftTransfersRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_list_blocks_mined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("action", "getminedblocks"))
        .and(query_param("blocktype", "uncles"))
        .respond_with(ok(json!([{
            "blockNumber": "3462296",
            "timeStamp": "1491118514",
            "blockReward": "5194770940000000000"
        }])))
        .mount(&server)
        .await;

    let blocks = accounts(&server)
        .list_blocks_mined(&ListBlocksRequest {
            address: addr("0x9dd134d14d1e65f84b706d6f205cd5b1cd03a46b"),
            block_type: BlockType::Uncles,
        })
        .await
        .unwrap();

    assert_eq!(blocks[0].block_number, 3_462_296);
    assert_eq!(blocks[0].block_reward, BigInt::from(5_194_770_940_000_000_000u64));
}

#[tokio::test]
async fn test_no_transactions_found_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "message": "No transactions found",
            "result": []
        })))
        .mount(&server)
        .await;

    let err = accounts(&server)
        .list_normal_transactions(&ListTxRequest::default())
        .await
        .unwrap_err();

    match err {
        ApiError::Response { status, message, .. } => {
            assert_eq!(status, "0");
            assert_eq!(message, "No transactions found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

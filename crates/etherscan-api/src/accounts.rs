//! `account` module: balances, transaction lists, token transfers and mined
//! blocks for an address.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Address, Bytes, Field, Hash, Request, Response, Slot};
use num_bigint::BigInt;

use crate::common::{wire_enum, BlockParameter, SortingPreference, ACCOUNTS_MODULE};

/// Client for the `account` module.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    api: Arc<ApiClient>,
}

/// Request parameters for [`AccountsClient::get_eth_balance`].
#[derive(Debug, Clone, Default)]
pub struct EthBalanceRequest {
    /// Account to query.
    pub address: Address,
    /// Block to query at.
    pub tag: BlockParameter,
}

impl Request for EthBalanceRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("Tag", "", &self.tag),
        ]
    }
}

/// Request parameters for [`AccountsClient::get_multi_eth_balances`].
#[derive(Debug, Clone, Default)]
pub struct MultiEthBalancesRequest {
    /// Accounts to query, sent as one comma-joined `address` parameter.
    pub addresses: Vec<Address>,
    /// Block to query at.
    pub tag: BlockParameter,
}

impl Request for MultiEthBalancesRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Addresses", "address", &self.addresses),
            Field::new("Tag", "", &self.tag),
        ]
    }
}

/// The Ether balance of one account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiBalance {
    /// The account.
    pub account: Address,
    /// Balance in wei.
    pub balance: BigInt,
}

impl Response for MultiBalance {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Account", "", &mut self.account),
            Slot::new("Balance", "", &mut self.balance),
        ]
    }
}

/// Request parameters for the transaction list actions.
#[derive(Debug, Clone, Default)]
pub struct ListTxRequest {
    /// Account to list.
    pub address: Address,
    /// First block, inclusive.
    pub start_block: u64,
    /// Last block, inclusive.
    pub end_block: u64,
    /// Page number, when paginating.
    pub page: Option<u32>,
    /// Page size, when paginating.
    pub offset: Option<u32>,
    /// Result ordering.
    pub sort: SortingPreference,
}

impl Request for ListTxRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("StartBlock", "", &self.start_block),
            Field::new("EndBlock", "", &self.end_block),
            Field::new("Page", "", &self.page),
            Field::new("Offset", "", &self.offset),
            Field::new("Sort", "", &self.sort),
        ]
    }
}

/// Fields shared by normal and internal transaction records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionInfo {
    /// Block the transaction was included in.
    pub block_number: u64,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Sender.
    pub from: Address,
    /// Recipient; zero for contract creation.
    pub to: Address,
    /// Value transferred in wei.
    pub value: BigInt,
    /// Address of the created contract, if any.
    pub contract_address: Option<Address>,
    /// Call data.
    pub input: Bytes,
    /// Gas limit.
    pub gas: u64,
    /// Gas consumed.
    pub gas_used: u64,
    /// Whether execution failed.
    pub is_error: bool,
}

impl Response for TransactionInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("BlockNumber", "blockNumber", &mut self.block_number),
            Slot::new("Timestamp", "timeStamp", &mut self.timestamp),
            Slot::new("From", "", &mut self.from),
            Slot::new("To", "", &mut self.to),
            Slot::new("Value", "", &mut self.value),
            Slot::new("ContractAddress", "contractAddress", &mut self.contract_address),
            Slot::new("Input", "", &mut self.input),
            Slot::new("Gas", "", &mut self.gas),
            Slot::new("GasUsed", "gasUsed", &mut self.gas_used),
            Slot::new("IsError", "isError,num", &mut self.is_error),
        ]
    }
}

/// A normal (externally-owned account) transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalTxInfo {
    /// Shared transaction fields.
    pub info: TransactionInfo,
    /// Transaction hash.
    pub hash: Hash,
    /// Sender nonce.
    pub nonce: u64,
    /// Hash of the including block.
    pub block_hash: Hash,
    /// Position within the block.
    pub transaction_index: u64,
    /// Gas price in wei.
    pub gas_price: BigInt,
    /// `"1"` success, `"0"` failure, empty before Byzantium.
    pub tx_receipt_status: String,
    /// Gas used by the block up to and including this transaction.
    pub cumulative_gas_used: u64,
    /// Blocks mined since.
    pub confirmations: u64,
}

impl Response for NormalTxInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.info),
            Slot::new("Hash", "", &mut self.hash),
            Slot::new("Nonce", "", &mut self.nonce),
            Slot::new("BlockHash", "blockHash", &mut self.block_hash),
            Slot::new("TransactionIndex", "transactionIndex", &mut self.transaction_index),
            Slot::new("GasPrice", "gasPrice", &mut self.gas_price),
            Slot::new("TxReceiptStatus", "txreceipt_status", &mut self.tx_receipt_status),
            Slot::new("CumulativeGasUsed", "cumulativeGasUsed", &mut self.cumulative_gas_used),
            Slot::new("Confirmations", "", &mut self.confirmations),
        ]
    }
}

/// An internal (contract-initiated) transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalTxInfo {
    /// Shared transaction fields.
    pub info: TransactionInfo,
    /// Hash of the parent transaction.
    pub hash: Hash,
    /// Position in the call trace, e.g. `"0_1_1"`.
    pub trace_id: String,
    /// Call type, e.g. `"call"` or `"create"`.
    pub kind: String,
}

impl Response for InternalTxInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.info),
            Slot::new("Hash", "", &mut self.hash),
            Slot::new("TraceID", "traceId", &mut self.trace_id),
            Slot::new("Type", "type", &mut self.kind),
        ]
    }
}

/// An internal transaction listed by parent transaction hash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalTxInfoByHash {
    /// Shared transaction fields.
    pub info: TransactionInfo,
    /// Call type.
    pub kind: String,
}

impl Response for InternalTxInfoByHash {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.info),
            Slot::new("Type", "type", &mut self.kind),
        ]
    }
}

/// Request parameters for [`AccountsClient::get_internal_txs_by_block_range`].
#[derive(Debug, Clone, Default)]
pub struct BlockRangeRequest {
    /// First block, inclusive.
    pub start_block: u64,
    /// Last block, inclusive.
    pub end_block: u64,
    /// Result ordering.
    pub sort: SortingPreference,
}

impl Request for BlockRangeRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("StartBlock", "", &self.start_block),
            Field::new("EndBlock", "", &self.end_block),
            Field::new("Sort", "", &self.sort),
        ]
    }
}

/// Request parameters for [`AccountsClient::list_token_transfers`].
#[derive(Debug, Clone, Default)]
pub struct TokenTransfersRequest {
    /// Account to list.
    pub address: Address,
    /// Token contract to filter on.
    pub contract_address: Address,
    /// Page number, when paginating.
    pub page: Option<u32>,
    /// Page size, when paginating.
    pub offset: Option<u32>,
    /// Result ordering.
    pub sort: SortingPreference,
}

impl Request for TokenTransfersRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("ContractAddress", "contractaddress", &self.contract_address),
            Field::new("Page", "", &self.page),
            Field::new("Offset", "", &self.offset),
            Field::new("Sort", "", &self.sort),
        ]
    }
}

/// Fields shared by ERC-20 and ERC-721 transfer records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseTokenTransferInfo {
    /// Block the transfer was included in.
    pub block_number: u64,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Transaction hash.
    pub hash: Hash,
    /// Sender nonce.
    pub nonce: u64,
    /// Hash of the including block.
    pub block_hash: Hash,
    /// Sender.
    pub from: Address,
    /// Token contract.
    pub contract_address: Address,
    /// Recipient.
    pub to: Address,
    /// Token name.
    pub token_name: String,
    /// Token symbol.
    pub token_symbol: String,
    /// Token decimals.
    pub token_decimal: u32,
    /// Position within the block.
    pub transaction_index: u32,
    /// Gas limit.
    pub gas: u64,
    /// Gas price in wei.
    pub gas_price: BigInt,
    /// Gas consumed.
    pub gas_used: u64,
    /// Gas used by the block up to and including this transaction.
    pub cumulative_gas_used: u64,
    /// Blocks mined since.
    pub confirmations: u64,
}

impl Response for BaseTokenTransferInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("BlockNumber", "blockNumber", &mut self.block_number),
            Slot::new("Timestamp", "timeStamp", &mut self.timestamp),
            Slot::new("Hash", "", &mut self.hash),
            Slot::new("Nonce", "", &mut self.nonce),
            Slot::new("BlockHash", "blockHash", &mut self.block_hash),
            Slot::new("From", "", &mut self.from),
            Slot::new("ContractAddress", "contractAddress", &mut self.contract_address),
            Slot::new("To", "", &mut self.to),
            Slot::new("TokenName", "tokenName", &mut self.token_name),
            Slot::new("TokenSymbol", "tokenSymbol", &mut self.token_symbol),
            Slot::new("TokenDecimal", "tokenDecimal", &mut self.token_decimal),
            Slot::new("TransactionIndex", "transactionIndex", &mut self.transaction_index),
            Slot::new("Gas", "", &mut self.gas),
            Slot::new("GasPrice", "gasPrice", &mut self.gas_price),
            Slot::new("GasUsed", "gasUsed", &mut self.gas_used),
            Slot::new("CumulativeGasUsed", "cumulativeGasUsed", &mut self.cumulative_gas_used),
            Slot::new("Confirmations", "", &mut self.confirmations),
        ]
    }
}

/// An ERC-20 token transfer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTransferInfo {
    /// Shared transfer fields.
    pub base: BaseTokenTransferInfo,
    /// Amount in the token's smallest unit.
    pub value: BigInt,
}

impl Response for TokenTransferInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.base),
            Slot::new("Value", "", &mut self.value),
        ]
    }
}

/// Request parameters for [`AccountsClient::list_nft_transfers`].
///
/// At least one of `address` and `contract_address` must be set.
#[derive(Debug, Clone, Default)]
pub struct ListNftTransfersRequest {
    /// Account to list.
    pub address: Option<Address>,
    /// Token contract to filter on.
    pub contract_address: Option<Address>,
    /// Result ordering.
    pub sort: SortingPreference,
}

impl Request for ListNftTransfersRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("ContractAddress", "contractaddress", &self.contract_address),
            Field::new("Sort", "", &self.sort),
        ]
    }
}

/// An ERC-721 token transfer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NftTransferInfo {
    /// Shared transfer fields.
    pub base: BaseTokenTransferInfo,
    /// Token identifier.
    pub token_id: String,
}

impl Response for NftTransferInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.base),
            Slot::new("TokenID", "tokenID", &mut self.token_id),
        ]
    }
}

/// Which kind of mined block to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockType {
    /// Canonical blocks.
    #[default]
    Blocks,
    /// Uncle blocks.
    Uncles,
}

wire_enum!(BlockType {
    Blocks => "blocks",
    Uncles => "uncles",
});

/// Request parameters for [`AccountsClient::list_blocks_mined`].
#[derive(Debug, Clone, Default)]
pub struct ListBlocksRequest {
    /// Miner address.
    pub address: Address,
    /// Kind of block.
    pub block_type: BlockType,
}

impl Request for ListBlocksRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("Type", "blocktype", &self.block_type),
        ]
    }
}

/// A block mined by an address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockInfo {
    /// Block number.
    pub block_number: u64,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Reward in wei.
    pub block_reward: BigInt,
}

impl Response for BlockInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("BlockNumber", "blockNumber", &mut self.block_number),
            Slot::new("Timestamp", "timeStamp", &mut self.timestamp),
            Slot::new("BlockReward", "blockReward", &mut self.block_reward),
        ]
    }
}

/// Request parameters for [`AccountsClient::get_historical_eth_balance`].
#[derive(Debug, Clone, Default)]
pub struct HistoricalEthRequest {
    /// Account to query.
    pub address: Address,
    /// Block to query at.
    pub block_number: u64,
}

impl Request for HistoricalEthRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("BlockNumber", "blockno", &self.block_number),
        ]
    }
}

decode_record!(
    MultiBalance,
    TransactionInfo,
    NormalTxInfo,
    InternalTxInfo,
    InternalTxInfoByHash,
    BaseTokenTransferInfo,
    TokenTransferInfo,
    NftTransferInfo,
    BlockInfo,
);

impl AccountsClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the Ether balance of a single address, in wei.
    pub async fn get_eth_balance(&self, req: &EthBalanceRequest) -> Result<BigInt, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "balance").request(req))
            .await
    }

    /// Get the Ether balances of several addresses in one call.
    pub async fn get_multi_eth_balances(
        &self,
        req: &MultiEthBalancesRequest,
    ) -> Result<Vec<MultiBalance>, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "balancemulti").request(req))
            .await
    }

    /// List the normal transactions sent or received by an address.
    pub async fn list_normal_transactions(
        &self,
        req: &ListTxRequest,
    ) -> Result<Vec<NormalTxInfo>, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "txlist").request(req))
            .await
    }

    /// List the internal transactions involving an address.
    pub async fn list_internal_transactions(
        &self,
        req: &ListTxRequest,
    ) -> Result<Vec<InternalTxInfo>, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "txlistinternal").request(req))
            .await
    }

    /// List the internal transactions spawned by one transaction.
    pub async fn get_internal_txs_by_hash(
        &self,
        tx_hash: Hash,
    ) -> Result<Vec<InternalTxInfoByHash>, ApiError> {
        let req = [Field::new("TxHash", "", &tx_hash)];
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "txlistinternal").request(&req))
            .await
    }

    /// List the internal transactions within a block range.
    pub async fn get_internal_txs_by_block_range(
        &self,
        req: &BlockRangeRequest,
    ) -> Result<Vec<InternalTxInfo>, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "txlistinternal").request(req))
            .await
    }

    /// List the ERC-20 transfers of an address for one token contract.
    pub async fn list_token_transfers(
        &self,
        req: &TokenTransfersRequest,
    ) -> Result<Vec<TokenTransferInfo>, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "tokentx").request(req))
            .await
    }

    /// List ERC-721 transfers by address, by contract, or both.
    ///
    /// # Returns
    /// [`ApiError::InvalidRequest`] without sending anything when neither
    /// filter is set.
    pub async fn list_nft_transfers(
        &self,
        req: &ListNftTransfersRequest,
    ) -> Result<Vec<NftTransferInfo>, ApiError> {
        if req.address.is_none() && req.contract_address.is_none() {
            return Err(ApiError::InvalidRequest(
                "at least one of address or contract address must be specified".to_string(),
            ));
        }

        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "tokennfttx").request(req))
            .await
    }

    /// List the blocks (or uncles) mined by an address.
    pub async fn list_blocks_mined(
        &self,
        req: &ListBlocksRequest,
    ) -> Result<Vec<BlockInfo>, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "getminedblocks").request(req))
            .await
    }

    /// Get the Ether balance of an address at a past block, in wei.
    pub async fn get_historical_eth_balance(
        &self,
        req: &HistoricalEthRequest,
    ) -> Result<BigInt, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "balancehistory").request(req))
            .await
    }
}

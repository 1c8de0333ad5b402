//! `proxy` module: Geth JSON-RPC methods relayed by Etherscan.
//!
//! Quantities arrive as `0x` hex, so most fields carry the `hex` modifier
//! and whole-value results are decoded with the `",hex"` directive.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Address, Bytes, Field, Hash, Request, Response, Slot};
use num_bigint::BigInt;

use crate::common::{BlockParameter, PROXY_MODULE};

/// Directive for hex-encoded whole-value results.
const HEX: &str = ",hex";

/// Client for the `proxy` module.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    api: Arc<ApiClient>,
}

/// Header fields common to full, summary and uncle blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyBaseBlockInfo {
    /// Block difficulty.
    pub difficulty: BigInt,
    /// Miner-supplied extra data.
    pub extra_data: Bytes,
    /// Gas limit.
    pub gas_limit: BigInt,
    /// Gas used.
    pub gas_used: BigInt,
    /// Block hash.
    pub hash: Hash,
    /// Bloom filter of the block's logs.
    pub logs_bloom: Bytes,
    /// Miner.
    pub miner: Address,
    /// Proof-of-work mix hash.
    pub mix_hash: Hash,
    /// Proof-of-work nonce.
    pub nonce: BigInt,
    /// Block number.
    pub number: u64,
    /// Parent block hash.
    pub parent_hash: Hash,
    /// Receipts trie root.
    pub receipts_root: Hash,
    /// Hash of the uncle list.
    pub sha3_uncles: Hash,
    /// Block size in bytes.
    pub size: u64,
    /// State trie root.
    pub state_root: Hash,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Transactions trie root.
    pub transactions_root: Hash,
    /// Uncle hashes.
    pub uncles: Vec<Hash>,
}

impl Response for ProxyBaseBlockInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Difficulty", "difficulty,hex", &mut self.difficulty),
            Slot::new("ExtraData", "extraData,hex", &mut self.extra_data),
            Slot::new("GasLimit", "gasLimit,hex", &mut self.gas_limit),
            Slot::new("GasUsed", "gasUsed,hex", &mut self.gas_used),
            Slot::new("Hash", "", &mut self.hash),
            Slot::new("LogsBloom", "logsBloom,hex", &mut self.logs_bloom),
            Slot::new("Miner", "", &mut self.miner),
            Slot::new("MixHash", "mixHash", &mut self.mix_hash),
            Slot::new("Nonce", "nonce,hex", &mut self.nonce),
            Slot::new("Number", "number,hex", &mut self.number),
            Slot::new("ParentHash", "parentHash", &mut self.parent_hash),
            Slot::new("ReceiptsRoot", "receiptsRoot", &mut self.receipts_root),
            Slot::new("SHA3Uncles", "sha3Uncles", &mut self.sha3_uncles),
            Slot::new("Size", "size,hex", &mut self.size),
            Slot::new("StateRoot", "stateRoot", &mut self.state_root),
            Slot::new("Timestamp", "timestamp,hex", &mut self.timestamp),
            Slot::new("TransactionsRoot", "transactionsRoot", &mut self.transactions_root),
            Slot::new("Uncles", "", &mut self.uncles),
        ]
    }
}

/// A block with its full transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyFullBlockInfo {
    /// Header fields.
    pub base: ProxyBaseBlockInfo,
    /// Cumulative chain difficulty.
    pub total_difficulty: BigInt,
    /// Transactions in block order.
    pub transactions: Vec<ProxyTransactionInfo>,
}

impl Response for ProxyFullBlockInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.base),
            Slot::new("TotalDifficulty", "totalDifficulty,hex", &mut self.total_difficulty),
            Slot::new("Transactions", "", &mut self.transactions),
        ]
    }
}

/// A block with transaction hashes only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxySummaryBlockInfo {
    /// Header fields.
    pub base: ProxyBaseBlockInfo,
    /// Cumulative chain difficulty.
    pub total_difficulty: BigInt,
    /// Transaction hashes in block order.
    pub transactions: Vec<Hash>,
}

impl Response for ProxySummaryBlockInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.base),
            Slot::new("TotalDifficulty", "totalDifficulty,hex", &mut self.total_difficulty),
            Slot::new("Transactions", "", &mut self.transactions),
        ]
    }
}

/// An uncle block header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyUncleBlockInfo {
    /// Header fields.
    pub base: ProxyBaseBlockInfo,
    /// EIP-1559 base fee, in wei.
    pub base_fee_per_gas: BigInt,
}

impl Response for ProxyUncleBlockInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.base),
            Slot::new("BaseFeePerGas", "baseFeePerGas,hex", &mut self.base_fee_per_gas),
        ]
    }
}

/// Position of a transaction or uncle within a block.
#[derive(Debug, Clone, Default)]
pub struct BlockNumberAndIndex {
    /// Block number.
    pub number: u64,
    /// Index within the block.
    pub index: u32,
}

impl Request for BlockNumberAndIndex {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Number", "tag,hex", &self.number),
            Field::new("Index", "index,hex", &self.index),
        ]
    }
}

/// A transaction as returned by the JSON-RPC methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyTransactionInfo {
    /// Hash of the including block.
    pub block_hash: Hash,
    /// Number of the including block.
    pub block_number: u64,
    /// Sender.
    pub from: Address,
    /// Gas limit.
    pub gas: BigInt,
    /// Gas price in wei.
    pub gas_price: BigInt,
    /// Transaction hash.
    pub hash: Hash,
    /// Call data.
    pub input: Bytes,
    /// Sender nonce.
    pub nonce: u64,
    /// Recipient; zero for contract creation.
    pub to: Address,
    /// Position within the block.
    pub transaction_index: u64,
    /// Value in wei.
    pub value: BigInt,
    /// EIP-2718 transaction type.
    pub kind: u32,
    /// Signature recovery id.
    pub v: u32,
    /// Signature `r`.
    pub r: BigInt,
    /// Signature `s`.
    pub s: BigInt,
}

impl Response for ProxyTransactionInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("BlockHash", "blockHash", &mut self.block_hash),
            Slot::new("BlockNumber", "blockNumber,hex", &mut self.block_number),
            Slot::new("From", "", &mut self.from),
            Slot::new("Gas", "gas,hex", &mut self.gas),
            Slot::new("GasPrice", "gasPrice,hex", &mut self.gas_price),
            Slot::new("Hash", "", &mut self.hash),
            Slot::new("Input", "", &mut self.input),
            Slot::new("Nonce", "nonce,hex", &mut self.nonce),
            Slot::new("To", "", &mut self.to),
            Slot::new("TransactionIndex", "transactionIndex,hex", &mut self.transaction_index),
            Slot::new("Value", "value,hex", &mut self.value),
            Slot::new("Type", "type,hex", &mut self.kind),
            Slot::new("V", "v,hex", &mut self.v),
            Slot::new("R", "r,hex", &mut self.r),
            Slot::new("S", "s,hex", &mut self.s),
        ]
    }
}

/// Request parameters for [`ProxyClient::get_transaction_count`].
#[derive(Debug, Clone, Default)]
pub struct TxCountRequest {
    /// Account to query.
    pub address: Address,
    /// Block to query at.
    pub tag: BlockParameter,
}

impl Request for TxCountRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("Tag", "", &self.tag),
        ]
    }
}

/// A transaction receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyTransactionReceipt {
    /// Hash of the including block.
    pub block_hash: Hash,
    /// Number of the including block.
    pub block_number: u64,
    /// Address of the created contract, if any.
    pub contract_address: Option<Address>,
    /// Gas used by the block up to and including this transaction.
    pub cumulative_gas_used: BigInt,
    /// Price actually paid per gas, in wei.
    pub effective_gas_price: BigInt,
    /// Sender.
    pub from: Address,
    /// Gas used by this transaction.
    pub gas_used: BigInt,
    /// Emitted logs.
    pub logs: Vec<ProxyTxLog>,
    /// Bloom filter of the logs.
    pub logs_bloom: Bytes,
    /// Whether execution succeeded.
    pub status: bool,
    /// Recipient.
    pub to: Address,
    /// Transaction hash.
    pub transaction_hash: Hash,
    /// Position within the block.
    pub transaction_index: u32,
    /// EIP-2718 transaction type.
    pub kind: u32,
}

impl Response for ProxyTransactionReceipt {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("BlockHash", "blockHash", &mut self.block_hash),
            Slot::new("BlockNumber", "blockNumber,hex", &mut self.block_number),
            Slot::new("ContractAddress", "contractAddress", &mut self.contract_address),
            Slot::new("CumulativeGasUsed", "cumulativeGasUsed,hex", &mut self.cumulative_gas_used),
            Slot::new("EffectiveGasPrice", "effectiveGasPrice,hex", &mut self.effective_gas_price),
            Slot::new("From", "", &mut self.from),
            Slot::new("GasUsed", "gasUsed,hex", &mut self.gas_used),
            Slot::new("Logs", "", &mut self.logs),
            Slot::new("LogsBloom", "logsBloom", &mut self.logs_bloom),
            Slot::new("Status", "status,hex", &mut self.status),
            Slot::new("To", "", &mut self.to),
            Slot::new("TransactionHash", "transactionHash", &mut self.transaction_hash),
            Slot::new("TransactionIndex", "transactionIndex,hex", &mut self.transaction_index),
            Slot::new("Type", "type,hex", &mut self.kind),
        ]
    }
}

/// A log inside a transaction receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyTxLog {
    /// Emitting contract.
    pub address: Address,
    /// Hash of the including block.
    pub block_hash: Hash,
    /// Number of the including block.
    pub block_number: u64,
    /// Non-indexed event data.
    pub data: Bytes,
    /// Position of the log in the block.
    pub log_index: u32,
    /// Whether the log was removed by a reorg.
    pub removed: bool,
    /// Indexed topics.
    pub topics: Vec<Hash>,
    /// Emitting transaction.
    pub transaction_hash: Hash,
    /// Position of the transaction in the block.
    pub transaction_index: u32,
    /// Position of the log in the transaction.
    pub transaction_log_index: u32,
    /// Log type, e.g. `"mined"`.
    pub kind: String,
}

impl Response for ProxyTxLog {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Address", "", &mut self.address),
            Slot::new("BlockHash", "blockHash", &mut self.block_hash),
            Slot::new("BlockNumber", "blockNumber,hex", &mut self.block_number),
            Slot::new("Data", "", &mut self.data),
            Slot::new("LogIndex", "logIndex,hex", &mut self.log_index),
            Slot::new("Removed", "", &mut self.removed),
            Slot::new("Topics", "", &mut self.topics),
            Slot::new("TransactionHash", "transactionHash", &mut self.transaction_hash),
            Slot::new("TransactionIndex", "transactionIndex,hex", &mut self.transaction_index),
            Slot::new("TransactionLogIndex", "transactionLogIndex,hex", &mut self.transaction_log_index),
            Slot::new("Type", "type", &mut self.kind),
        ]
    }
}

/// Request parameters for [`ProxyClient::call`].
#[derive(Debug, Clone, Default)]
pub struct CallRequest {
    /// Contract to call.
    pub to: Address,
    /// Call data.
    pub data: Bytes,
    /// Block to execute against.
    pub tag: BlockParameter,
}

impl Request for CallRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("To", "", &self.to),
            Field::new("Data", "", &self.data),
            Field::new("Tag", "", &self.tag),
        ]
    }
}

/// Request parameters for [`ProxyClient::get_code`].
#[derive(Debug, Clone, Default)]
pub struct GetCodeRequest {
    /// Contract address.
    pub address: Address,
    /// Block to query at.
    pub tag: BlockParameter,
}

impl Request for GetCodeRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("Tag", "", &self.tag),
        ]
    }
}

/// Request parameters for [`ProxyClient::get_storage_at`].
#[derive(Debug, Clone, Default)]
pub struct GetStorageRequest {
    /// Contract address.
    pub address: Address,
    /// Storage slot.
    pub position: u32,
    /// Block to query at.
    pub tag: BlockParameter,
}

impl Request for GetStorageRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Address", "", &self.address),
            Field::new("Position", "position,hex", &self.position),
            Field::new("Tag", "", &self.tag),
        ]
    }
}

/// Request parameters for [`ProxyClient::estimate_gas`].
#[derive(Debug, Clone, Default)]
pub struct EstimateGasRequest {
    /// Call data.
    pub data: Bytes,
    /// Recipient.
    pub to: Address,
    /// Value in wei.
    pub value: Option<BigInt>,
    /// Gas limit.
    pub gas: Option<BigInt>,
    /// Gas price in wei.
    pub gas_price: Option<BigInt>,
}

impl Request for EstimateGasRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Data", "", &self.data),
            Field::new("To", "", &self.to),
            Field::new("Value", "value,hex", &self.value),
            Field::new("Gas", "gas,hex", &self.gas),
            Field::new("GasPrice", "gasPrice,hex", &self.gas_price),
        ]
    }
}

struct BlockByNumberRequest {
    number: u64,
    full: bool,
}

impl Request for BlockByNumberRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Number", "tag,hex", &self.number),
            Field::new("Boolean", "", &self.full),
        ]
    }
}

decode_record!(
    ProxyBaseBlockInfo,
    ProxyFullBlockInfo,
    ProxySummaryBlockInfo,
    ProxyUncleBlockInfo,
    ProxyTransactionInfo,
    ProxyTransactionReceipt,
    ProxyTxLog,
);

impl ProxyClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the number of the most recent block.
    pub async fn block_number(&self) -> Result<u64, ApiError> {
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_blockNumber").directive(HEX))
            .await
    }

    /// Get a block with its full transactions.
    pub async fn get_block_by_number_full(
        &self,
        number: u64,
    ) -> Result<ProxyFullBlockInfo, ApiError> {
        let req = BlockByNumberRequest { number, full: true };
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_getBlockByNumber").request(&req))
            .await
    }

    /// Get a block with transaction hashes only.
    pub async fn get_block_by_number_summary(
        &self,
        number: u64,
    ) -> Result<ProxySummaryBlockInfo, ApiError> {
        let req = BlockByNumberRequest { number, full: false };
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_getBlockByNumber").request(&req))
            .await
    }

    /// Get an uncle by block number and uncle index.
    pub async fn get_uncle_by_block_number_and_index(
        &self,
        req: &BlockNumberAndIndex,
    ) -> Result<ProxyUncleBlockInfo, ApiError> {
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_getUncleByBlockNumberAndIndex").request(req))
            .await
    }

    /// Get the number of transactions in a block.
    pub async fn get_block_transaction_count_by_number(
        &self,
        number: u64,
    ) -> Result<u32, ApiError> {
        let req = [Field::new("Tag", "tag,hex", &number)];
        self.api
            .call(
                CallParams::new(PROXY_MODULE, "eth_getBlockTransactionCountByNumber")
                    .request(&req)
                    .directive(HEX),
            )
            .await
    }

    /// Get a transaction by hash.
    pub async fn get_transaction_by_hash(
        &self,
        tx_hash: Hash,
    ) -> Result<ProxyTransactionInfo, ApiError> {
        let req = [Field::new("TxHash", "", &tx_hash)];
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_getTransactionByHash").request(&req))
            .await
    }

    /// Get a transaction by block number and index.
    pub async fn get_transaction_by_block_number_and_index(
        &self,
        req: &BlockNumberAndIndex,
    ) -> Result<ProxyTransactionInfo, ApiError> {
        self.api
            .call(
                CallParams::new(PROXY_MODULE, "eth_getTransactionByBlockNumberAndIndex")
                    .request(req),
            )
            .await
    }

    /// Get the number of transactions sent from an address.
    pub async fn get_transaction_count(&self, req: &TxCountRequest) -> Result<u64, ApiError> {
        self.api
            .call(
                CallParams::new(PROXY_MODULE, "eth_getTransactionCount")
                    .request(req)
                    .directive(HEX),
            )
            .await
    }

    /// Broadcast a signed raw transaction and return its hash.
    pub async fn send_raw_transaction(&self, data: &Bytes) -> Result<Hash, ApiError> {
        let req = [Field::new("Hex", "", data)];
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_sendRawTransaction").request(&req))
            .await
    }

    /// Get the receipt of a transaction.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: Hash,
    ) -> Result<ProxyTransactionReceipt, ApiError> {
        let req = [Field::new("TxHash", "", &tx_hash)];
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_getTransactionReceipt").request(&req))
            .await
    }

    /// Execute a message call without creating a transaction.
    pub async fn call(&self, req: &CallRequest) -> Result<Bytes, ApiError> {
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_call").request(req))
            .await
    }

    /// Get the code deployed at an address.
    pub async fn get_code(&self, req: &GetCodeRequest) -> Result<Bytes, ApiError> {
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_getCode").request(req))
            .await
    }

    /// Read a storage slot of a contract.
    pub async fn get_storage_at(&self, req: &GetStorageRequest) -> Result<Bytes, ApiError> {
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_getStorageAt").request(req))
            .await
    }

    /// Get the current gas price in wei.
    pub async fn gas_price(&self) -> Result<BigInt, ApiError> {
        self.api
            .call(CallParams::new(PROXY_MODULE, "eth_gasPrice").directive(HEX))
            .await
    }

    /// Estimate the gas a call would use.
    pub async fn estimate_gas(&self, req: &EstimateGasRequest) -> Result<BigInt, ApiError> {
        self.api
            .call(
                CallParams::new(PROXY_MODULE, "eth_estimateGas")
                    .request(req)
                    .directive(HEX),
            )
            .await
    }
}

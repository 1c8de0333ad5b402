//! `stats` module: Ether supply and price, node statistics and daily network
//! statistics.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Field, Request, Response, Slot};
use num_bigint::BigInt;

use crate::common::{wire_enum, DateRange, SortingPreference, STATS_MODULE};

/// Client for the `stats` module.
#[derive(Debug, Clone)]
pub struct StatsClient {
    api: Arc<ApiClient>,
}

/// Latest Ether price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EthPrice {
    /// Price in BTC.
    pub eth_btc: BigDecimal,
    /// When the BTC price was observed.
    pub eth_btc_timestamp: DateTime<Utc>,
    /// Price in USD.
    pub eth_usd: BigDecimal,
    /// When the USD price was observed.
    pub eth_usd_timestamp: DateTime<Utc>,
}

impl Response for EthPrice {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("ETHBTC", "", &mut self.eth_btc),
            Slot::new("ETHBTCTimestamp", "ethbtc_timestamp", &mut self.eth_btc_timestamp),
            Slot::new("ETHUSD", "", &mut self.eth_usd),
            Slot::new("ETHUSDTimestamp", "ethusd_timestamp", &mut self.eth_usd_timestamp),
        ]
    }
}

/// Client implementation filter of a chain size query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EthClientType {
    /// go-ethereum.
    #[default]
    Geth,
    /// OpenEthereum, formerly Parity.
    Parity,
}

wire_enum!(EthClientType {
    Geth => "geth",
    Parity => "parity",
});

/// Client implementation as reported in chain size results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EthClientTypeResult {
    /// go-ethereum.
    #[default]
    Geth,
    /// OpenEthereum, formerly Parity.
    Parity,
}

wire_enum!(EthClientTypeResult {
    Geth => "Geth",
    Parity => "Parity",
});

/// Node sync mode filter of a chain size query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeSyncMode {
    /// Pruned state.
    #[default]
    Default,
    /// Full history.
    Archive,
}

wire_enum!(NodeSyncMode {
    Default => "default",
    Archive => "archive",
});

/// Node sync mode as reported in chain size results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeSyncModeResult {
    /// Pruned state.
    #[default]
    Default,
    /// Full history.
    Archive,
}

wire_enum!(NodeSyncModeResult {
    Default => "Default",
    Archive => "Archive",
});

/// Request parameters for [`StatsClient::get_ethereum_nodes_size`].
#[derive(Debug, Clone, Default)]
pub struct NodesSizeRequest {
    /// First day, inclusive.
    pub start_date: DateTime<Utc>,
    /// Last day, inclusive.
    pub end_date: DateTime<Utc>,
    /// Client implementation.
    pub client_type: EthClientType,
    /// Sync mode.
    pub sync_mode: NodeSyncMode,
    /// Result ordering.
    pub sort: SortingPreference,
}

impl Request for NodesSizeRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("StartDate", "startdate,date", &self.start_date),
            Field::new("EndDate", "enddate,date", &self.end_date),
            Field::new("ClientType", "", &self.client_type),
            Field::new("SyncMode", "", &self.sync_mode),
            Field::new("Sort", "", &self.sort),
        ]
    }
}

/// Size of the chain data at a block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EthNodeSize {
    /// Block number.
    pub block_number: u64,
    /// The day.
    pub chain_timestamp: DateTime<Utc>,
    /// Size in bytes.
    pub chain_size: BigInt,
    /// Client implementation.
    pub client_type: EthClientTypeResult,
    /// Sync mode.
    pub sync_mode: NodeSyncModeResult,
}

impl Response for EthNodeSize {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("BlockNumber", "blockNumber", &mut self.block_number),
            Slot::new("ChainTimestamp", "chainTimeStamp,date", &mut self.chain_timestamp),
            Slot::new("ChainSize", "chainSize", &mut self.chain_size),
            Slot::new("ClientType", "clientType", &mut self.client_type),
            Slot::new("SyncMode", "syncMode", &mut self.sync_mode),
        ]
    }
}

/// Number of discoverable nodes on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeCount {
    /// The day.
    pub date: DateTime<Utc>,
    /// Node count.
    pub total_node_count: u64,
}

impl Response for NodeCount {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Date", "UTCDate,date", &mut self.date),
            Slot::new("TotalNodeCount", "TotalNodeCount", &mut self.total_node_count),
        ]
    }
}

/// Transaction fees paid on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTxFee {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Fees in ETH.
    pub tx_fee_eth: BigDecimal,
}

impl Response for DailyTxFee {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("TxFeeETH", "transactionFee_Eth", &mut self.tx_fee_eth),
        ]
    }
}

/// New addresses created on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyNewAddrCount {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Addresses created.
    pub new_addr_count: u64,
}

impl Response for DailyNewAddrCount {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("NewAddrCount", "newAddressCount,num", &mut self.new_addr_count),
        ]
    }
}

/// Average gas used over gas limit on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkUtil {
    /// Utilisation ratio.
    pub network_util: BigDecimal,
    /// The day.
    pub timestamp: DateTime<Utc>,
}

impl Response for NetworkUtil {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("NetworkUtil", "networkUtilization", &mut self.network_util),
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
        ]
    }
}

/// Average network hash rate on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkHashRate {
    /// Hash rate in GH/s.
    pub network_hash_rate: BigDecimal,
    /// The day.
    pub timestamp: DateTime<Utc>,
}

impl Response for NetworkHashRate {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("NetworkHashRate", "networkHashRate", &mut self.network_hash_rate),
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
        ]
    }
}

/// Transactions performed on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TxCount {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Transaction count.
    pub tx_count: BigInt,
}

impl Response for TxCount {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("TxCount", "transactionCount,num", &mut self.tx_count),
        ]
    }
}

/// Average mining difficulty on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetDifficulty {
    /// Difficulty in TH.
    pub difficulty: BigDecimal,
    /// The day.
    pub timestamp: DateTime<Utc>,
}

impl Response for NetDifficulty {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Difficulty", "networkDifficulty,comma", &mut self.difficulty),
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
        ]
    }
}

/// Ether market capitalisation on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalMarketCap {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Circulating supply in ETH.
    pub supply: BigDecimal,
    /// Market cap in USD.
    pub market_cap: BigDecimal,
    /// Price in USD.
    pub price: BigDecimal,
}

impl Response for HistoricalMarketCap {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("Supply", "", &mut self.supply),
            Slot::new("MarketCap", "marketCap", &mut self.market_cap),
            Slot::new("Price", "", &mut self.price),
        ]
    }
}

/// Ether price on a day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalEthPrice {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Price in USD.
    pub usd_value: BigDecimal,
}

impl Response for HistoricalEthPrice {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("USDValue", "value", &mut self.usd_value),
        ]
    }
}

decode_record!(
    EthPrice,
    EthNodeSize,
    NodeCount,
    DailyTxFee,
    DailyNewAddrCount,
    NetworkUtil,
    NetworkHashRate,
    TxCount,
    NetDifficulty,
    HistoricalMarketCap,
    HistoricalEthPrice,
);

impl StatsClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the amount of Ether in circulation, in wei.
    pub async fn get_total_eth_supply(&self) -> Result<BigInt, ApiError> {
        self.api.call(CallParams::new(STATS_MODULE, "ethsupply")).await
    }

    /// Get the latest Ether price.
    pub async fn get_last_eth_price(&self) -> Result<EthPrice, ApiError> {
        self.api.call(CallParams::new(STATS_MODULE, "ethprice")).await
    }

    /// Get the chain data size over a date range.
    pub async fn get_ethereum_nodes_size(
        &self,
        req: &NodesSizeRequest,
    ) -> Result<Vec<EthNodeSize>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "chainsize").request(req))
            .await
    }

    /// Get the number of discoverable nodes.
    pub async fn get_total_nodes_count(&self) -> Result<NodeCount, ApiError> {
        self.api.call(CallParams::new(STATS_MODULE, "nodecount")).await
    }

    /// Get the daily transaction fees over a date range.
    pub async fn get_daily_network_tx_fee(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<DailyTxFee>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailytxnfee").request(dates))
            .await
    }

    /// Get the daily new address count over a date range.
    pub async fn get_daily_new_addr_count(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<DailyNewAddrCount>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailynewaddress").request(dates))
            .await
    }

    /// Get the daily network utilisation over a date range.
    pub async fn get_daily_network_util(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<NetworkUtil>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailynetutilization").request(dates))
            .await
    }

    /// Get the daily average hash rate over a date range.
    pub async fn get_daily_avg_hash_rate(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<NetworkHashRate>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailyavghashrate").request(dates))
            .await
    }

    /// Get the daily transaction count over a date range.
    pub async fn get_daily_tx_count(&self, dates: &DateRange) -> Result<Vec<TxCount>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailytx").request(dates))
            .await
    }

    /// Get the daily average mining difficulty over a date range.
    pub async fn get_daily_avg_net_difficulty(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<NetDifficulty>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailyavgnetdifficulty").request(dates))
            .await
    }

    /// Get the daily Ether market cap over a date range.
    pub async fn get_eth_historical_daily_market_cap(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<HistoricalMarketCap>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "ethdailymarketcap").request(dates))
            .await
    }

    /// Get the daily Ether price over a date range.
    pub async fn get_eth_historical_price(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<HistoricalEthPrice>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "ethdailyprice").request(dates))
            .await
    }
}

//! `gastracker` module: confirmation estimates, the gas oracle and daily gas
//! statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Field, Response, Slot};
use num_bigint::BigInt;

use crate::common::{DateRange, GAS_MODULE, STATS_MODULE};

/// Wei per gwei.
const WEI_PER_GWEI: u64 = 1_000_000_000;

/// Client for the `gastracker` module.
#[derive(Debug, Clone)]
pub struct GasClient {
    api: Arc<ApiClient>,
}

/// Current recommended gas prices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasPrices {
    /// Block the estimate is based on.
    pub last_block: u64,
    /// Safe gas price in gwei.
    pub safe_gas_price: u64,
    /// Proposed gas price in gwei.
    pub propose_gas_price: u64,
    /// Fast gas price in gwei.
    pub fast_gas_price: u64,
    /// Base fee of the next block in gwei.
    pub suggest_base_fee: f64,
    /// Gas used ratio of recent blocks.
    pub gas_used_ratio: Vec<f64>,
}

impl Response for GasPrices {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("LastBlock", "LastBlock", &mut self.last_block),
            Slot::new("SafeGasPrice", "SafeGasPrice", &mut self.safe_gas_price),
            Slot::new("ProposeGasPrice", "ProposeGasPrice", &mut self.propose_gas_price),
            Slot::new("FastGasPrice", "FastGasPrice", &mut self.fast_gas_price),
            Slot::new("SuggestBaseFee", "suggestBaseFee", &mut self.suggest_base_fee),
            Slot::new("GasUsedRatio", "gasUsedRatio,sep", &mut self.gas_used_ratio),
        ]
    }
}

/// Average gas limit on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvgGasLimit {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Average gas limit.
    pub gas_limit: u64,
}

impl Response for AvgGasLimit {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("GasLimit", "gasLimit", &mut self.gas_limit),
        ]
    }
}

/// Total gas used on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasUsed {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Gas used.
    pub gas_used: BigInt,
}

impl Response for GasUsed {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("GasUsed", "gasUsed", &mut self.gas_used),
        ]
    }
}

/// Gas price spread on one day, in wei.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvgGasPrice {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Highest gas price.
    pub max_gas_price: BigInt,
    /// Lowest gas price.
    pub min_gas_price: BigInt,
    /// Average gas price.
    pub avg_gas_price: BigInt,
}

impl Response for AvgGasPrice {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("MaxGasPrice", "maxGasPrice_Wei", &mut self.max_gas_price),
            Slot::new("MinGasPrice", "minGasPrice_Wei", &mut self.min_gas_price),
            Slot::new("AvgGasPrice", "avgGasPrice_Wei", &mut self.avg_gas_price),
        ]
    }
}

decode_record!(GasPrices, AvgGasLimit, GasUsed, AvgGasPrice);

impl GasClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Estimate the seconds until a transaction paying `gas_price_gwei` is
    /// confirmed.
    pub async fn estimate_confirmation_time(&self, gas_price_gwei: i64) -> Result<u64, ApiError> {
        let gas_price_wei = BigInt::from(gas_price_gwei) * BigInt::from(WEI_PER_GWEI);
        let req = [Field::new("GasPrice", "gasprice", &gas_price_wei)];
        self.api
            .call(CallParams::new(GAS_MODULE, "gasestimate").request(&req))
            .await
    }

    /// Get the current safe, proposed and fast gas prices.
    pub async fn get_gas_oracle(&self) -> Result<GasPrices, ApiError> {
        self.api.call(CallParams::new(GAS_MODULE, "gasoracle")).await
    }

    /// Get the daily average gas limit over a date range.
    pub async fn get_daily_avg_gas_limit(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<AvgGasLimit>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailyavggaslimit").request(dates))
            .await
    }

    /// Get the daily total gas used over a date range.
    pub async fn get_daily_total_gas_used(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<GasUsed>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailygasused").request(dates))
            .await
    }

    /// Get the daily gas price spread over a date range.
    pub async fn get_daily_avg_gas_price(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<AvgGasPrice>, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "dailyavggasprice").request(dates))
            .await
    }
}

//! `block` module: rewards, countdowns, timestamp lookups and daily block
//! statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Address, Field, Request, Response, Slot};
use num_bigint::BigInt;

use crate::common::{wire_enum, DateRange, BLOCKS_MODULE};

/// Client for the `block` module.
#[derive(Debug, Clone)]
pub struct BlocksClient {
    api: Arc<ApiClient>,
}

/// Mining reward of a block, including uncle rewards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockRewards {
    /// Block number.
    pub block_number: u64,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Miner of the block.
    pub block_miner: Address,
    /// Reward in wei.
    pub block_reward: BigInt,
    /// Rewards paid to uncle miners.
    pub uncles: Vec<UncleReward>,
    /// Extra reward for including uncles, in wei.
    pub uncle_inclusion_reward: BigInt,
}

impl Response for BlockRewards {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("BlockNumber", "blockNumber", &mut self.block_number),
            Slot::new("Timestamp", "timeStamp", &mut self.timestamp),
            Slot::new("BlockMiner", "blockMiner", &mut self.block_miner),
            Slot::new("BlockReward", "blockReward", &mut self.block_reward),
            Slot::new("Uncles", "", &mut self.uncles),
            Slot::new("UncleInclusionReward", "uncleInclusionReward", &mut self.uncle_inclusion_reward),
        ]
    }
}

/// Reward paid for one uncle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UncleReward {
    /// Uncle miner.
    pub miner: Address,
    /// Position among the block's uncles.
    pub uncle_position: u32,
    /// Reward in wei.
    pub block_reward: BigInt,
}

impl Response for UncleReward {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Miner", "", &mut self.miner),
            Slot::new("UnclePosition", "unclePosition", &mut self.uncle_position),
            Slot::new("BlockReward", "blockreward", &mut self.block_reward),
        ]
    }
}

/// Estimated time until a block is mined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockCountdown {
    /// Current chain head.
    pub current_block: u64,
    /// The block counted down to.
    pub countdown_block: u64,
    /// Blocks still to be mined.
    pub remaining_block: u64,
    /// Estimated seconds remaining.
    pub estimate_time_in_sec: f64,
}

impl Response for BlockCountdown {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("CurrentBlock", "CurrentBlock", &mut self.current_block),
            Slot::new("CountdownBlock", "CountdownBlock", &mut self.countdown_block),
            Slot::new("RemainingBlock", "RemainingBlock", &mut self.remaining_block),
            Slot::new("EstimateTimeInSec", "EstimateTimeInSec", &mut self.estimate_time_in_sec),
        ]
    }
}

/// Which side of a timestamp to pick a block from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClosestAvailableBlock {
    /// The last block at or before the timestamp.
    #[default]
    Before,
    /// The first block at or after the timestamp.
    After,
}

wire_enum!(ClosestAvailableBlock {
    Before => "before",
    After => "after",
});

/// Request parameters for [`BlocksClient::get_block_number`].
#[derive(Debug, Clone, Default)]
pub struct BlockNumberRequest {
    /// The instant to look up.
    pub timestamp: DateTime<Utc>,
    /// Which side of the instant to pick.
    pub closest: ClosestAvailableBlock,
}

impl Request for BlockNumberRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Timestamp", "", &self.timestamp),
            Field::new("Closest", "", &self.closest),
        ]
    }
}

/// Average block size on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AverageBlockSize {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Average size in bytes.
    pub block_size_bytes: u32,
}

impl Response for AverageBlockSize {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("BlockSizeBytes", "blockSize_bytes,num", &mut self.block_size_bytes),
        ]
    }
}

/// Total block rewards paid on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyBlockRewards {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Rewards in ETH.
    pub block_rewards_eth: f64,
}

impl Response for DailyBlockRewards {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("BlockRewardsETH", "blockRewards_Eth", &mut self.block_rewards_eth),
        ]
    }
}

/// Blocks mined and rewards paid on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockCount {
    /// The day and its rewards.
    pub rewards: DailyBlockRewards,
    /// Blocks mined.
    pub block_count: u32,
}

impl Response for BlockCount {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::flatten(&mut self.rewards),
            Slot::new("BlockCount", "blockCount,num", &mut self.block_count),
        ]
    }
}

/// Average block time on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyBlockTime {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Average seconds per block.
    pub block_time_seconds: f64,
}

impl Response for DailyBlockTime {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("BlockTimeSeconds", "blockTime_sec", &mut self.block_time_seconds),
        ]
    }
}

/// Uncles mined and uncle rewards paid on one day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyUnclesCount {
    /// The day.
    pub timestamp: DateTime<Utc>,
    /// Uncle blocks mined.
    pub uncle_block_count: u32,
    /// Uncle rewards in ETH.
    pub uncle_block_rewards_eth: f64,
}

impl Response for DailyUnclesCount {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Timestamp", "unixTimeStamp", &mut self.timestamp),
            Slot::new("UncleBlockCount", "uncleBlockCount,num", &mut self.uncle_block_count),
            Slot::new("UncleBlockRewardsETH", "uncleBlockRewards_Eth", &mut self.uncle_block_rewards_eth),
        ]
    }
}

decode_record!(
    BlockRewards,
    UncleReward,
    BlockCountdown,
    AverageBlockSize,
    DailyBlockRewards,
    BlockCount,
    DailyBlockTime,
    DailyUnclesCount,
);

impl BlocksClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the block and uncle rewards of a block.
    pub async fn get_block_rewards(&self, block_number: u64) -> Result<BlockRewards, ApiError> {
        let req = [Field::new("Blockno", "", &block_number)];
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "getblockreward").request(&req))
            .await
    }

    /// Get the estimated time until a future block is mined.
    pub async fn get_block_countdown(&self, block_number: u64) -> Result<BlockCountdown, ApiError> {
        let req = [Field::new("Blockno", "", &block_number)];
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "getblockcountdown").request(&req))
            .await
    }

    /// Get the number of the block mined closest to a timestamp.
    pub async fn get_block_number(&self, req: &BlockNumberRequest) -> Result<u64, ApiError> {
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "getblocknobytime").request(req))
            .await
    }

    /// Get the daily average block size over a date range.
    pub async fn get_daily_average_block_size(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<AverageBlockSize>, ApiError> {
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "dailyavgblocksize").request(dates))
            .await
    }

    /// Get the daily block count and rewards over a date range.
    pub async fn get_daily_block_count(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<BlockCount>, ApiError> {
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "dailyblkcount").request(dates))
            .await
    }

    /// Get the daily block rewards over a date range.
    pub async fn get_daily_block_rewards(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<DailyBlockRewards>, ApiError> {
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "dailyblockrewards").request(dates))
            .await
    }

    /// Get the daily average block time over a date range.
    pub async fn get_daily_average_block_time(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<DailyBlockTime>, ApiError> {
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "dailyavgblocktime").request(dates))
            .await
    }

    /// Get the daily uncle count and uncle rewards over a date range.
    pub async fn get_daily_uncles_count(
        &self,
        dates: &DateRange,
    ) -> Result<Vec<DailyUnclesCount>, ApiError> {
        self.api
            .call(CallParams::new(BLOCKS_MODULE, "dailyuncleblkcount").request(dates))
            .await
    }
}

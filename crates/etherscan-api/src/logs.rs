//! `logs` module: event logs filtered by block range, address and topics.
//!
//! Topic parameters have computed names (`topic0`, `topic0_1_opr`, ...), so
//! this request builds its wire map by hand instead of describing fields.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use etherscan_httpapi::{ApiClient, ApiError, RequestParams};
use etherscan_marshal::{
    decode_record, unmarshal_response, Address, Bytes, Hash, Response, Slot, WireMap,
};
use num_bigint::BigInt;

use crate::common::{wire_enum, LOGS_MODULE};

/// Most topics a filter may carry.
pub const MAX_TOPICS: usize = 4;

/// Client for the `logs` module.
#[derive(Debug, Clone)]
pub struct LogsClient {
    api: Arc<ApiClient>,
}

/// A block bound of a log query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogsBlockParam {
    /// A specific block.
    Number(u64),
    /// The chain head.
    Latest,
}

impl Default for LogsBlockParam {
    fn default() -> Self {
        LogsBlockParam::Number(0)
    }
}

impl LogsBlockParam {
    fn to_param(self) -> String {
        match self {
            LogsBlockParam::Number(n) => n.to_string(),
            LogsBlockParam::Latest => "latest".to_string(),
        }
    }
}

/// How two topic filters combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonOperator {
    /// Both topics must match.
    #[default]
    And,
    /// Either topic may match.
    Or,
}

wire_enum!(ComparisonOperator {
    And => "and",
    Or => "or",
});

/// Operator joining two topic positions, sent as `topic{a}_{b}_opr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicComparison {
    /// The two topic positions; the second must be greater than the first.
    pub topics: [u8; 2],
    /// The operator.
    pub operator: ComparisonOperator,
}

impl TopicComparison {
    fn to_param(self) -> Result<(String, String), ApiError> {
        let [first, second] = self.topics;
        if second <= first {
            return Err(ApiError::InvalidRequest(
                "second topic must be greater than first".to_string(),
            ));
        }
        if usize::from(second) >= MAX_TOPICS {
            return Err(ApiError::InvalidRequest(format!(
                "topic position {second} is out of range"
            )));
        }

        Ok((
            format!("topic{first}_{second}_opr"),
            self.operator.as_str().to_string(),
        ))
    }
}

/// Request parameters for [`LogsClient::get_logs`].
#[derive(Debug, Clone, Default)]
pub struct LogsRequest {
    /// First block, inclusive.
    pub from_block: LogsBlockParam,
    /// Last block, inclusive.
    pub to_block: LogsBlockParam,
    /// Emitting contract.
    pub address: Address,
    /// Topic filters by position, at most [`MAX_TOPICS`].
    pub topics: Vec<Hash>,
    /// Operators between topic positions.
    pub comparisons: Vec<TopicComparison>,
}

impl LogsRequest {
    /// Validate the request and build its wire parameters.
    ///
    /// # Returns
    /// The parameter map, or [`ApiError::InvalidRequest`] for too many topics
    /// or a malformed comparison.
    pub fn to_params(&self) -> Result<WireMap, ApiError> {
        if self.topics.len() > MAX_TOPICS {
            return Err(ApiError::InvalidRequest(format!(
                "a maximum of {MAX_TOPICS} topics is allowed"
            )));
        }

        let mut params = WireMap::new();
        params.insert("fromBlock".to_string(), self.from_block.to_param());
        params.insert("toBlock".to_string(), self.to_block.to_param());
        params.insert("address".to_string(), self.address.to_string());

        for (i, topic) in self.topics.iter().enumerate() {
            params.insert(format!("topic{i}"), topic.to_string());
        }

        for comparison in &self.comparisons {
            let (key, value) = comparison.to_param()?;
            params.insert(key, value);
        }

        Ok(params)
    }
}

/// One event log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogResponse {
    /// Emitting contract.
    pub address: Address,
    /// Block number.
    pub block_number: u64,
    /// Non-indexed event data.
    pub data: Bytes,
    /// Gas price in wei.
    pub gas_price: BigInt,
    /// Gas used.
    pub gas_used: BigInt,
    /// Position of the log in the block.
    pub log_index: u32,
    /// Block timestamp.
    pub timestamp: DateTime<Utc>,
    /// Indexed topics.
    pub topics: Vec<Hash>,
    /// Emitting transaction.
    pub transaction_hash: Hash,
    /// Position of the transaction in the block.
    pub transaction_index: u32,
}

impl Response for LogResponse {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("Address", "", &mut self.address),
            Slot::new("BlockNumber", "blockNumber,hex", &mut self.block_number),
            Slot::new("Data", "", &mut self.data),
            Slot::new("GasPrice", "gasPrice,hex", &mut self.gas_price),
            Slot::new("GasUsed", "gasUsed,hex", &mut self.gas_used),
            Slot::new("LogIndex", "logIndex,hex", &mut self.log_index),
            Slot::new("Timestamp", "timeStamp,hex", &mut self.timestamp),
            Slot::new("Topics", "", &mut self.topics),
            Slot::new("TransactionHash", "transactionHash", &mut self.transaction_hash),
            Slot::new("TransactionIndex", "transactionIndex,hex", &mut self.transaction_index),
        ]
    }
}

decode_record!(LogResponse);

impl LogsClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the event logs matching a filter.
    ///
    /// The request is validated before anything is sent.
    pub async fn get_logs(&self, req: &LogsRequest) -> Result<Vec<LogResponse>, ApiError> {
        let params = req.to_params().map_err(|e| {
            tracing::debug!(error = %e, "rejecting getLogs request");
            e
        })?;

        let result = self
            .api
            .get(RequestParams {
                module: LOGS_MODULE.to_string(),
                action: "getLogs".to_string(),
                params,
            })
            .await?;

        Ok(unmarshal_response(&result)?)
    }
}

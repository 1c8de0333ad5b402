#![deny(missing_docs)]

//! # etherscan-api
//!
//! Typed clients for each Etherscan API module.
//!
//! Every client holds a shared [`ApiClient`](etherscan_httpapi::ApiClient)
//! and exposes one async method per endpoint. Requests and results are
//! plain records whose wire names and encodings are described through
//! [`etherscan_marshal`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use etherscan_api::BlocksClient;
//! use etherscan_httpapi::{ApiClient, ApiConfig};
//!
//! # async fn run() -> Result<(), etherscan_httpapi::ApiError> {
//! let api = Arc::new(ApiClient::new(ApiConfig::default())?);
//! let blocks = BlocksClient::new(api);
//! let countdown = blocks.get_block_countdown(16_701_588).await?;
//! println!("{} blocks to go", countdown.remaining_block);
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod blocks;
pub mod common;
pub mod contracts;
pub mod gas;
pub mod logs;
pub mod proxy;
pub mod stats;
pub mod tokens;
pub mod transactions;

pub use accounts::AccountsClient;
pub use blocks::BlocksClient;
pub use common::{BlockParameter, DateRange, SortingPreference};
pub use contracts::ContractsClient;
pub use gas::GasClient;
pub use logs::LogsClient;
pub use proxy::ProxyClient;
pub use stats::StatsClient;
pub use tokens::TokensClient;
pub use transactions::TransactionsClient;

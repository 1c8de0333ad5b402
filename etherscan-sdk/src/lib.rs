#![deny(missing_docs)]

//! Etherscan API client - complete SDK.
//!
//! Re-exports the marshalling core, the HTTP transport and the per-module
//! endpoint clients, and composes them into a single [`Client`].
//!
//! # Example
//!
//! ```no_run
//! use etherscan_sdk::{ApiConfig, Client};
//!
//! # async fn run() -> Result<(), etherscan_sdk::ApiError> {
//! let client = Client::new(ApiConfig {
//!     api_key: "my-key".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let supply = client.stats.get_total_eth_supply().await?;
//! let head = client.proxy.block_number().await?;
//! println!("{supply} wei in circulation at block {head}");
//! # Ok(())
//! # }
//! ```

mod client;

pub use etherscan_api as api;
pub use etherscan_httpapi as httpapi;
pub use etherscan_marshal as marshal;

pub use client::Client;
pub use etherscan_httpapi::{ApiConfig, ApiError};
pub use etherscan_marshal::{Address, Bytes, Hash, UnmarshalError};

#![deny(missing_docs)]

//! # etherscan-httpapi
//!
//! HTTP transport for the Etherscan API.
//!
//! Every endpoint is a GET on `{base_url}/api` with `module`, `action` and
//! `apikey` query parameters plus the marshalled request record. Responses
//! arrive in a `{status, message, result}` envelope; this crate checks the
//! envelope and hands `result` to the unmarshaller.
//!
//! # Example
//!
//! ```no_run
//! use etherscan_httpapi::{ApiClient, ApiConfig, CallParams};
//! use etherscan_marshal::Field;
//!
//! # async fn run() -> Result<(), etherscan_httpapi::ApiError> {
//! let client = ApiClient::new(ApiConfig {
//!     api_key: "my-key".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let address = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae".to_string();
//! let request = [Field::new("Address", "", &address)];
//! let balance: u64 = client
//!     .call(CallParams::new("account", "balance").request(&request))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ApiConfig, CallParams, Envelope, RequestParams, RpcError, DEFAULT_BASE_URL};

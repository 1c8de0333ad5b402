//! Client configuration and call parameter types.

use std::time::Duration;

use etherscan_marshal::{Request, WireMap};
use serde::Deserialize;
use serde_json::Value;

/// Base URL of the Ethereum mainnet API.
pub const DEFAULT_BASE_URL: &str = "https://api.etherscan.io";

/// Envelope status that marks success.
pub(crate) const STATUS_OK: &str = "1";

/// Configuration for an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without the trailing `/api` (e.g. `https://api-goerli.etherscan.io`).
    pub base_url: String,
    /// API key sent as the `apikey` parameter.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: None,
        }
    }
}

/// A raw call: module, action and already marshalled parameters.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    /// API module, e.g. `account`.
    pub module: String,
    /// Action within the module, e.g. `balance`.
    pub action: String,
    /// Extra query parameters.
    pub params: WireMap,
}

/// A typed call: the request record is marshalled and the result decoded.
#[derive(Clone, Copy)]
pub struct CallParams<'a> {
    /// API module, e.g. `account`.
    pub module: &'a str,
    /// Action within the module, e.g. `balance`.
    pub action: &'a str,
    /// Request record; `None` sends no extra parameters.
    pub request: Option<&'a dyn Request>,
    /// Directive applied to the whole result, e.g. `",hex"`.
    pub directive: &'a str,
}

impl<'a> CallParams<'a> {
    /// Start a call with no request record and no directive.
    pub fn new(module: &'a str, action: &'a str) -> Self {
        Self {
            module,
            action,
            request: None,
            directive: "",
        }
    }

    /// Attach a request record.
    pub fn request(mut self, request: &'a dyn Request) -> Self {
        self.request = Some(request);
        self
    }

    /// Decode the result under `directive`.
    pub fn directive(mut self, directive: &'a str) -> Self {
        self.directive = directive;
        self
    }
}

/// The outer `{status, message, result}` wrapper of every response.
///
/// Proxy endpoints answer in JSON-RPC form without `status`; the missing
/// fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    /// `"1"` on success, `"0"` on failure, empty for proxy calls.
    #[serde(default)]
    pub status: String,
    /// Short human-readable message.
    #[serde(default)]
    pub message: String,
    /// The payload.
    #[serde(default)]
    pub result: Value,
    /// JSON-RPC error object, set by proxy calls that fail.
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// The `error` member of a failed JSON-RPC response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcError {
    /// JSON-RPC error code, e.g. `-32602` for invalid params.
    #[serde(default)]
    pub code: i64,
    /// Reason reported by the node.
    #[serde(default)]
    pub message: String,
}

impl Envelope {
    /// An empty status is accepted: proxy calls carry none. A JSON-RPC
    /// `error` member always fails.
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && (self.status.is_empty() || self.status == STATUS_OK)
    }
}

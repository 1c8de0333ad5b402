//! Error types for Etherscan API calls.

use etherscan_marshal::UnmarshalError;

/// Errors that can occur when calling the Etherscan API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not a valid envelope.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The server answered with a non-200 status.
    #[error("server error ({status_code}): {message}")]
    Status {
        /// HTTP status code.
        status_code: u16,
        /// Response body, if any.
        message: String,
    },

    /// The envelope reports a failure.
    #[error("API error - status: {status}, message: {message}, result: {result}")]
    Response {
        /// Envelope status, anything other than `"1"`.
        status: String,
        /// Envelope message, e.g. `"NOTOK"`.
        message: String,
        /// Raw `result`, which usually carries the reason.
        result: String,
    },

    /// A proxy call returned a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Reason reported by the node.
        message: String,
    },

    /// The envelope's result could not be decoded.
    #[error("unmarshal error: {0}")]
    Unmarshal(#[from] UnmarshalError),

    /// The request was rejected before sending.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

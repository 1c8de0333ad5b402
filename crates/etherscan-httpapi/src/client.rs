//! Etherscan HTTP client.

use etherscan_marshal::{marshal_request, unmarshal_response_with, Decode, WireMap};
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::ApiError;
use crate::types::{ApiConfig, CallParams, Envelope, RequestParams};

/// HTTP client for the Etherscan API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// `{base_url}/api`.
    api_url: String,
    /// Client configuration.
    config: ApiConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client with its own HTTP connection pool.
    ///
    /// # Arguments
    /// * `config` - Base URL, API key and optional timeout.
    ///
    /// # Returns
    /// The client, or an error if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_http_client(config, client))
    }

    /// Create a client around an existing HTTP client.
    ///
    /// The configured timeout is ignored; the injected client's own settings
    /// apply.
    pub fn with_http_client(config: ApiConfig, client: reqwest::Client) -> Self {
        let api_url = format!("{}/api", config.base_url.trim_end_matches('/'));
        Self {
            api_url,
            config,
            client,
        }
    }

    /// The endpoint every call is sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The client configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Call an action and decode its result.
    ///
    /// # Arguments
    /// * `params` - Module, action, optional request record and result directive.
    ///
    /// # Returns
    /// The decoded result. An absent result (`null` or `""`) yields `T::default()`.
    pub async fn call<T: Decode + Default>(&self, params: CallParams<'_>) -> Result<T, ApiError> {
        let wire = match params.request {
            Some(request) => marshal_request(request),
            None => WireMap::new(),
        };

        let result = self
            .get(RequestParams {
                module: params.module.to_string(),
                action: params.action.to_string(),
                params: wire,
            })
            .await?;

        Ok(unmarshal_response_with(&result, params.directive)?)
    }

    /// Issue a GET and return the envelope's raw `result`.
    ///
    /// # Arguments
    /// * `params` - Module, action and marshalled query parameters.
    ///
    /// # Returns
    /// The `result` value, or an error for transport failures, non-200
    /// statuses, JSON-RPC error objects and envelopes whose status is not
    /// `"1"`.
    pub async fn get(&self, params: RequestParams) -> Result<Value, ApiError> {
        tracing::debug!(
            url = %self.api_url,
            module = %params.module,
            action = %params.action,
            params = ?params.params,
            "making HTTP request"
        );

        let resp = self
            .client
            .get(&self.api_url)
            .query(&[
                ("module", params.module.as_str()),
                ("action", params.action.as_str()),
                ("apikey", self.config.api_key.as_str()),
            ])
            .query(&params.params)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let message = resp.text().await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to read error response body");
                String::new()
            });
            return Err(ApiError::Status {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;

        if let Some(error) = &envelope.error {
            tracing::warn!(
                module = %params.module,
                action = %params.action,
                code = error.code,
                reason = %error.message,
                "RPC call returned an error"
            );
            return Err(ApiError::Rpc {
                code: error.code,
                message: error.message.clone(),
            });
        }

        if !envelope.is_ok() {
            tracing::warn!(
                module = %params.module,
                action = %params.action,
                status = %envelope.status,
                message = %envelope.message,
                "API returned an error"
            );
            return Err(ApiError::Response {
                result: result_text(&envelope.result),
                status: envelope.status,
                message: envelope.message,
            });
        }

        Ok(envelope.result)
    }
}

/// Strings render bare; anything else as JSON.
fn result_text(result: &Value) -> String {
    match result {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

//! The composed top-level client.

use std::sync::Arc;

use etherscan_api::{
    AccountsClient, BlocksClient, ContractsClient, GasClient, LogsClient, ProxyClient,
    StatsClient, TokensClient, TransactionsClient,
};
use etherscan_httpapi::{ApiClient, ApiConfig, ApiError};

/// One client per Etherscan module, all sharing a single HTTP client.
#[derive(Debug, Clone)]
pub struct Client {
    api: Arc<ApiClient>,
    /// Account balances, transaction lists and mined blocks.
    pub accounts: AccountsClient,
    /// Verified contract ABIs and source code.
    pub contracts: ContractsClient,
    /// Execution and receipt status checks.
    pub transactions: TransactionsClient,
    /// Block rewards, countdowns and daily block statistics.
    pub blocks: BlocksClient,
    /// Event logs.
    pub logs: LogsClient,
    /// Geth JSON-RPC methods.
    pub proxy: ProxyClient,
    /// Token supply, balances and project information.
    pub tokens: TokensClient,
    /// Gas oracle and daily gas statistics.
    pub gas: GasClient,
    /// Ether supply, price and network statistics.
    pub stats: StatsClient,
}

impl Client {
    /// Create a client from `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, API key and timeout shared by every module
    ///
    /// # Returns
    ///
    /// The client, or [`ApiError::Http`] if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::from_api(Arc::new(ApiClient::new(config)?)))
    }

    /// Create a client around an existing transport.
    pub fn from_api(api: Arc<ApiClient>) -> Self {
        Self {
            accounts: AccountsClient::new(Arc::clone(&api)),
            contracts: ContractsClient::new(Arc::clone(&api)),
            transactions: TransactionsClient::new(Arc::clone(&api)),
            blocks: BlocksClient::new(Arc::clone(&api)),
            logs: LogsClient::new(Arc::clone(&api)),
            proxy: ProxyClient::new(Arc::clone(&api)),
            tokens: TokensClient::new(Arc::clone(&api)),
            gas: GasClient::new(Arc::clone(&api)),
            stats: StatsClient::new(Arc::clone(&api)),
            api,
        }
    }

    /// The shared transport.
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }
}

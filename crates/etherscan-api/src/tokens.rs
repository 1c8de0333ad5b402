//! ERC-20 and ERC-721 token supply, balances and project information.
//!
//! The endpoints are spread over the `stats`, `account` and `token` modules.

use std::sync::Arc;

use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Address, Field, Request, Response, Slot};
use num_bigint::BigInt;

use crate::common::{ACCOUNTS_MODULE, STATS_MODULE, TOKEN_MODULE};

/// Client for token actions.
#[derive(Debug, Clone)]
pub struct TokensClient {
    api: Arc<ApiClient>,
}

/// Request parameters for [`TokensClient::get_account_balance`].
#[derive(Debug, Clone, Default)]
pub struct BalanceRequest {
    /// Token contract.
    pub contract_address: Address,
    /// Holder.
    pub address: Address,
}

impl Request for BalanceRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("ContractAddress", "", &self.contract_address),
            Field::new("Address", "", &self.address),
        ]
    }
}

/// Request parameters for [`TokensClient::get_historical_supply`].
#[derive(Debug, Clone, Default)]
pub struct HistoricalSupplyRequest {
    /// Token contract.
    pub contract_address: Address,
    /// Block height to query at.
    pub block_no: u64,
}

impl Request for HistoricalSupplyRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("ContractAddress", "", &self.contract_address),
            Field::new("BlockNo", "", &self.block_no),
        ]
    }
}

/// Request parameters for [`TokensClient::get_historical_balance`].
#[derive(Debug, Clone, Default)]
pub struct HistoricalBalanceRequest {
    /// Token contract.
    pub contract_address: Address,
    /// Holder.
    pub address: Address,
    /// Block height to query at.
    pub block_no: u64,
}

impl Request for HistoricalBalanceRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("ContractAddress", "", &self.contract_address),
            Field::new("Address", "", &self.address),
            Field::new("BlockNo", "", &self.block_no),
        ]
    }
}

/// Project information and social links of a token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenInfo {
    /// Token contract.
    pub contract_address: Address,
    /// Token name.
    pub token_name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal places.
    pub divisor: u32,
    /// `ERC20` or `ERC721`.
    pub token_type: String,
    /// Supply in the token's smallest unit.
    pub total_supply: BigInt,
    /// Whether the project is verified.
    pub blue_checkmark: bool,
    /// Project description.
    pub description: String,
    /// Project website.
    pub website: String,
    /// Contact email.
    pub email: String,
    /// Blog URL.
    pub blog: String,
    /// Reddit URL.
    pub reddit: String,
    /// Slack URL.
    pub slack: String,
    /// Facebook URL.
    pub facebook: String,
    /// Twitter URL.
    pub twitter: String,
    /// BitcoinTalk thread.
    pub bitcoin_talk: String,
    /// GitHub URL.
    pub github: String,
    /// Telegram URL.
    pub telegram: String,
    /// WeChat URL.
    pub we_chat: String,
    /// LinkedIn URL.
    pub linked_in: String,
    /// Discord URL.
    pub discord: String,
    /// Whitepaper URL.
    pub whitepaper: String,
    /// Last known price in USD.
    pub token_price_usd: f64,
}

impl Response for TokenInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("ContractAddress", "contractAddress", &mut self.contract_address),
            Slot::new("TokenName", "tokenName", &mut self.token_name),
            Slot::new("Symbol", "", &mut self.symbol),
            Slot::new("Divisor", "", &mut self.divisor),
            Slot::new("TokenType", "tokenType", &mut self.token_type),
            Slot::new("TotalSupply", "totalSupply", &mut self.total_supply),
            Slot::new("BlueCheckmark", "blueCheckmark,str", &mut self.blue_checkmark),
            Slot::new("Description", "", &mut self.description),
            Slot::new("Website", "", &mut self.website),
            Slot::new("Email", "", &mut self.email),
            Slot::new("Blog", "", &mut self.blog),
            Slot::new("Reddit", "", &mut self.reddit),
            Slot::new("Slack", "", &mut self.slack),
            Slot::new("Facebook", "", &mut self.facebook),
            Slot::new("Twitter", "", &mut self.twitter),
            Slot::new("BitcoinTalk", "", &mut self.bitcoin_talk),
            Slot::new("Github", "", &mut self.github),
            Slot::new("Telegram", "", &mut self.telegram),
            Slot::new("WeChat", "", &mut self.we_chat),
            Slot::new("LinkedIn", "", &mut self.linked_in),
            Slot::new("Discord", "", &mut self.discord),
            Slot::new("Whitepaper", "", &mut self.whitepaper),
            Slot::new("TokenPriceUSD", "tokenPriceUSD", &mut self.token_price_usd),
        ]
    }
}

decode_record!(TokenInfo);

impl TokensClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the amount of a token in circulation.
    ///
    /// # Arguments
    ///
    /// * `contract_address` - The token contract
    ///
    /// # Returns
    ///
    /// The supply in the token's smallest unit.
    pub async fn get_total_supply(&self, contract_address: Address) -> Result<BigInt, ApiError> {
        let req = [Field::new("ContractAddress", "", &contract_address)];
        self.api
            .call(CallParams::new(STATS_MODULE, "tokensupply").request(&req))
            .await
    }

    /// Get the current token balance of an address.
    pub async fn get_account_balance(&self, req: &BalanceRequest) -> Result<BigInt, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "tokenbalance").request(req))
            .await
    }

    /// Get the amount of a token in circulation at a block height.
    pub async fn get_historical_supply(
        &self,
        req: &HistoricalSupplyRequest,
    ) -> Result<BigInt, ApiError> {
        self.api
            .call(CallParams::new(STATS_MODULE, "tokensupplyhistory").request(req))
            .await
    }

    /// Get the token balance of an address at a block height.
    pub async fn get_historical_balance(
        &self,
        req: &HistoricalBalanceRequest,
    ) -> Result<BigInt, ApiError> {
        self.api
            .call(CallParams::new(ACCOUNTS_MODULE, "tokenbalancehistory").request(req))
            .await
    }

    /// Get project information and social links of a token.
    pub async fn get_token_info(&self, contract_address: Address) -> Result<Vec<TokenInfo>, ApiError> {
        let req = [Field::new("ContractAddress", "", &contract_address)];
        self.api
            .call(CallParams::new(TOKEN_MODULE, "tokeninfo").request(&req))
            .await
    }
}

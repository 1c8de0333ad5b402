//! `transaction` module: execution and receipt status checks.

use std::sync::Arc;

use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Field, Hash, Response, Slot};

use crate::common::TRANSACTIONS_MODULE;

/// Client for the `transaction` module.
#[derive(Debug, Clone)]
pub struct TransactionsClient {
    api: Arc<ApiClient>,
}

/// Outcome of a contract execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionStatus {
    /// Whether execution failed.
    pub is_error: bool,
    /// Failure reason, empty on success.
    pub err_description: String,
}

impl Response for ExecutionStatus {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("IsError", "isError,num", &mut self.is_error),
            Slot::new("ErrDescription", "errDescription", &mut self.err_description),
        ]
    }
}

#[derive(Debug, Default)]
struct ReceiptStatus {
    status: bool,
}

impl Response for ReceiptStatus {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![Slot::new("Status", "status,num", &mut self.status)]
    }
}

decode_record!(ExecutionStatus, ReceiptStatus);

impl TransactionsClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the execution status of a contract call.
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - The transaction to check
    ///
    /// # Returns
    ///
    /// Whether execution failed, and why.
    pub async fn get_execution_status(&self, tx_hash: Hash) -> Result<ExecutionStatus, ApiError> {
        let req = [Field::new("TxHash", "", &tx_hash)];
        self.api
            .call(CallParams::new(TRANSACTIONS_MODULE, "getstatus").request(&req))
            .await
    }

    /// Get the receipt status of a transaction.
    ///
    /// # Returns
    ///
    /// `true` if the transaction succeeded.
    pub async fn get_tx_receipt_status(&self, tx_hash: Hash) -> Result<bool, ApiError> {
        let req = [Field::new("TxHash", "", &tx_hash)];
        let result: ReceiptStatus = self
            .api
            .call(CallParams::new(TRANSACTIONS_MODULE, "gettxreceiptstatus").request(&req))
            .await?;
        Ok(result.status)
    }
}

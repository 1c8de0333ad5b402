//! `contract` module: verified contract ABIs and source code.

use std::sync::Arc;

use etherscan_httpapi::{ApiClient, ApiError, CallParams};
use etherscan_marshal::{decode_record, Address, Field, Response, Slot};

use crate::common::CONTRACTS_MODULE;

/// Client for the `contract` module.
#[derive(Debug, Clone)]
pub struct ContractsClient {
    api: Arc<ApiClient>,
}

/// Verified source code and compiler settings of a contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractInfo {
    /// Solidity source, or a JSON bundle for multi-file contracts.
    pub source_code: String,
    /// ABI as a JSON string.
    pub abi: String,
    /// Contract name.
    pub contract_name: String,
    /// Compiler version, e.g. `v0.4.24+commit.e67f0147`.
    pub compiler_version: String,
    /// `"1"` if the optimizer was enabled.
    pub optimization_used: String,
    /// Optimizer runs.
    pub runs: u32,
    /// ABI-encoded constructor arguments.
    pub constructor_arguments: String,
    /// Target EVM version.
    pub evm_version: String,
    /// Linked libraries.
    pub library: String,
    /// SPDX license.
    pub license_type: String,
    /// Whether the contract is a proxy.
    pub proxy: bool,
    /// Implementation address of a proxy, as sent.
    pub implementation: String,
    /// Swarm hash of the source.
    pub swarm_source: String,
}

impl Response for ContractInfo {
    fn slots(&mut self) -> Vec<Slot<'_>> {
        vec![
            Slot::new("SourceCode", "SourceCode", &mut self.source_code),
            Slot::new("ABI", "ABI", &mut self.abi),
            Slot::new("ContractName", "ContractName", &mut self.contract_name),
            Slot::new("CompilerVersion", "CompilerVersion", &mut self.compiler_version),
            Slot::new("OptimizationUsed", "OptimizationUsed", &mut self.optimization_used),
            Slot::new("Runs", "Runs", &mut self.runs),
            Slot::new("ConstructorArguments", "ConstructorArguments", &mut self.constructor_arguments),
            Slot::new("EVMVersion", "EVMVersion", &mut self.evm_version),
            Slot::new("Library", "Library", &mut self.library),
            Slot::new("LicenseType", "LicenseType", &mut self.license_type),
            Slot::new("Proxy", "Proxy,num", &mut self.proxy),
            Slot::new("Implementation", "Implementation", &mut self.implementation),
            Slot::new("SwarmSource", "SwarmSource", &mut self.swarm_source),
        ]
    }
}

decode_record!(ContractInfo);

impl ContractsClient {
    /// Create a client sharing `api`.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Get the ABI of a verified contract as a JSON string.
    pub async fn get_contract_abi(&self, address: Address) -> Result<String, ApiError> {
        let req = [Field::new("Address", "", &address)];
        self.api
            .call(CallParams::new(CONTRACTS_MODULE, "getabi").request(&req))
            .await
    }

    /// Get the source code of a verified contract.
    pub async fn get_contract_source_code(
        &self,
        address: Address,
    ) -> Result<Vec<ContractInfo>, ApiError> {
        let req = [Field::new("Address", "", &address)];
        self.api
            .call(CallParams::new(CONTRACTS_MODULE, "getsourcecode").request(&req))
            .await
    }
}

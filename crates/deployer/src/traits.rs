//! Trait definitions for external system boundaries.
//!
//! These traits abstract the compiled contract artifacts and the blockchain
//! so that a deployment can be unit tested with mocks.

use {
    alloy::primitives::{Address, Bytes, TxHash},
    anyhow::Result,
    contracts::ContractFactory,
};

/// A contract whose creation transaction has been confirmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
}

/// Resolves symbolic contract names to deployable factories.
#[cfg_attr(test, mockall::automock)]
pub trait ContractFactories: Send + Sync {
    /// Fails if no compiled contract with that name exists.
    fn get_contract_factory(&self, name: &str) -> Result<ContractFactory>;
}

impl ContractFactories for contracts::Artifacts {
    fn get_contract_factory(&self, name: &str) -> Result<ContractFactory> {
        Ok(self.contract_factory(name)?)
    }
}

/// Abstracts the network the contract is deployed to.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Chain: Send + Sync {
    /// Sends a contract creation transaction with the given creation code and
    /// returns its hash without waiting for it to be mined.
    async fn deploy(&self, code: Bytes) -> Result<TxHash>;

    /// Waits until the creation transaction is confirmed.
    ///
    /// Fails if the transaction reverted or did not create a contract.
    async fn wait_for_deployment(&self, tx: TxHash) -> Result<DeployedContract>;

    /// Returns the code stored at `address`, empty if there is no contract.
    async fn code_at(&self, address: Address) -> Result<Bytes>;
}

use {
    crate::traits::{Chain, DeployedContract},
    alloy::{
        network::{EthereumWallet, ReceiptResponse, TransactionBuilder as _},
        primitives::{Address, Bytes, TxHash},
        providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
        rpc::types::TransactionRequest,
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result, ensure},
    std::{num::NonZeroU64, time::Duration},
    url::Url,
};

/// Deploys contracts through an Ethereum JSON-RPC node.
pub struct Node {
    provider: DynProvider,
    /// Address of the local signer. Without one transactions are signed by
    /// the node.
    signer: Option<Address>,
    confirmations: NonZeroU64,
    timeout: Option<Duration>,
}

impl Node {
    pub fn new(
        url: Url,
        signer: Option<PrivateKeySigner>,
        confirmations: NonZeroU64,
        timeout: Option<Duration>,
    ) -> Self {
        match signer {
            Some(signer) => {
                let address = signer.address();
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::from(signer))
                    .connect_http(url)
                    .erased();
                Self::with_provider(provider, Some(address), confirmations, timeout)
            }
            None => {
                let provider = ProviderBuilder::new().connect_http(url).erased();
                Self::with_provider(provider, None, confirmations, timeout)
            }
        }
    }

    pub fn with_provider(
        provider: DynProvider,
        signer: Option<Address>,
        confirmations: NonZeroU64,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            provider,
            signer,
            confirmations,
            timeout,
        }
    }

    /// The account the deployment is sent from: the local signer, or else the
    /// first account the node manages.
    async fn sender(&self) -> Result<Address> {
        if let Some(signer) = self.signer {
            return Ok(signer);
        }
        let accounts = self
            .provider
            .get_accounts()
            .await
            .context("could not fetch the accounts managed by the node")?;
        accounts
            .first()
            .copied()
            .context("node does not manage any accounts, configure a private key")
    }
}

#[async_trait::async_trait]
impl Chain for Node {
    async fn deploy(&self, code: Bytes) -> Result<TxHash> {
        let from = self.sender().await?;
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(code);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("deployment transaction was rejected")?;
        tracing::info!(tx = ?pending.tx_hash(), ?from, "sent deployment transaction");
        Ok(*pending.tx_hash())
    }

    async fn wait_for_deployment(&self, tx: TxHash) -> Result<DeployedContract> {
        tracing::debug!(?tx, confirmations = self.confirmations.get(), "waiting for deployment");
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx)
            .with_required_confirmations(self.confirmations.get())
            .with_timeout(self.timeout)
            .get_receipt()
            .await
            .with_context(|| format!("deployment transaction {tx} was not confirmed"))?;
        deployed_contract(tx, &receipt)
    }

    async fn code_at(&self, address: Address) -> Result<Bytes> {
        self.provider
            .get_code_at(address)
            .await
            .with_context(|| format!("could not fetch code at {address}"))
    }
}

/// Only a successful receipt that created a contract counts as a deployment.
fn deployed_contract(tx: TxHash, receipt: &impl ReceiptResponse) -> Result<DeployedContract> {
    ensure!(receipt.status(), "deployment transaction {tx} reverted");
    let address = receipt
        .contract_address()
        .with_context(|| format!("transaction {tx} did not create a contract"))?;

    Ok(DeployedContract {
        address,
        transaction_hash: tx,
        block_number: receipt.block_number(),
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::{providers::mock::Asserter, rpc::types::TransactionReceipt},
        serde_json::json,
    };

    const TX: TxHash = TxHash::repeat_byte(0x42);

    fn mocked_node(asserter: &Asserter, signer: Option<Address>) -> Node {
        observe::tracing::initialize_reentrant("warn,deployer=debug");
        let provider = ProviderBuilder::new()
            .connect_mocked_client(asserter.clone())
            .erased();
        Node::with_provider(provider, signer, NonZeroU64::MIN, None)
    }

    /// A legacy receipt for `TX` as returned by `eth_getTransactionReceipt`.
    fn receipt(status: &str, contract_address: Option<Address>) -> TransactionReceipt {
        serde_json::from_value(json!({
            "type": "0x0",
            "status": status,
            "cumulativeGasUsed": "0x1d4c0",
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "transactionHash": TX,
            "transactionIndex": "0x0",
            "blockHash": TxHash::repeat_byte(0x07),
            "blockNumber": "0x5",
            "gasUsed": "0x1d4c0",
            "effectiveGasPrice": "0x3b9aca00",
            "from": Address::repeat_byte(0x22),
            "to": null,
            "contractAddress": contract_address,
        }))
        .unwrap()
    }

    #[test]
    fn successful_receipt_is_a_deployment() {
        let address = Address::repeat_byte(0xab);

        let deployed = deployed_contract(TX, &receipt("0x1", Some(address))).unwrap();

        assert_eq!(
            deployed,
            DeployedContract {
                address,
                transaction_hash: TX,
                block_number: Some(5),
            }
        );
    }

    #[test]
    fn reverted_receipt_is_an_error() {
        let err = deployed_contract(TX, &receipt("0x0", Some(Address::repeat_byte(0xab))))
            .unwrap_err();

        assert_eq!(err.to_string(), format!("deployment transaction {TX} reverted"));
    }

    #[test]
    fn receipt_without_contract_address_is_an_error() {
        let err = deployed_contract(TX, &receipt("0x1", None)).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("transaction {TX} did not create a contract")
        );
    }

    #[tokio::test]
    async fn unconfirmed_deployment_times_out() {
        observe::tracing::initialize_reentrant("warn,deployer=debug");
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .connect_mocked_client(asserter.clone())
            .erased();
        let node = Node::with_provider(
            provider,
            None,
            NonZeroU64::MIN,
            Some(Duration::from_millis(100)),
        );

        let err = tokio::time::timeout(Duration::from_secs(10), node.wait_for_deployment(TX))
            .await
            .expect("wait_for_deployment ignored its timeout")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("deployment transaction {TX} was not confirmed")
        );
    }

    #[tokio::test]
    async fn sender_prefers_local_signer() {
        let asserter = Asserter::new();
        let node = mocked_node(&asserter, Some(Address::repeat_byte(0x11)));

        // No RPC response is queued, so querying the node would fail.
        assert_eq!(node.sender().await.unwrap(), Address::repeat_byte(0x11));
    }

    #[tokio::test]
    async fn sender_falls_back_to_first_node_account() {
        let asserter = Asserter::new();
        asserter.push_success(&vec![Address::repeat_byte(0x22), Address::repeat_byte(0x33)]);
        let node = mocked_node(&asserter, None);

        assert_eq!(node.sender().await.unwrap(), Address::repeat_byte(0x22));
    }

    #[tokio::test]
    async fn deploy_fails_without_accounts() {
        let asserter = Asserter::new();
        asserter.push_success(&Vec::<Address>::new());
        let node = mocked_node(&asserter, None);

        let err = node.deploy(Bytes::from(vec![0x00])).await.unwrap_err();
        assert!(err.to_string().contains("does not manage any accounts"));
    }

    #[tokio::test]
    async fn deploy_surfaces_node_errors() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("connection refused");
        let node = mocked_node(&asserter, None);

        assert!(node.deploy(Bytes::from(vec![0x00])).await.is_err());
    }

    #[tokio::test]
    async fn fetches_code() {
        let asserter = Asserter::new();
        asserter.push_success(&Bytes::from(vec![0x60, 0x80]));
        let node = mocked_node(&asserter, None);

        assert_eq!(
            node.code_at(Address::repeat_byte(0x44)).await.unwrap(),
            Bytes::from(vec![0x60, 0x80])
        );
    }
}

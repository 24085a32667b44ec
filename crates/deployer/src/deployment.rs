use {
    crate::traits::{Chain, ContractFactories, DeployedContract},
    anyhow::{Context, Result, ensure},
    std::io::Write,
};

/// The contract the `deploy-voting` binary deploys.
pub const CONTRACT_NAME: &str = "Voting";

/// Deploys the contract `name` without constructor arguments and, once the
/// deployment is confirmed, writes its address to `out`.
///
/// Nothing is written to `out` unless every step succeeded. Every call
/// creates a new contract instance.
pub async fn deploy(
    factories: &dyn ContractFactories,
    chain: &dyn Chain,
    name: &str,
    out: &mut impl Write,
) -> Result<DeployedContract> {
    let factory = factories
        .get_contract_factory(name)
        .with_context(|| format!("could not get contract factory for {name}"))?;
    let code = factory.deploy_code()?;

    let tx = chain
        .deploy(code)
        .await
        .with_context(|| format!("failed to deploy {name}"))?;
    let deployed = chain.wait_for_deployment(tx).await?;

    let code = chain.code_at(deployed.address).await?;
    ensure!(
        !code.is_empty(),
        "no code at {} after deploying {name}",
        deployed.address
    );

    tracing::info!(
        address = %deployed.address,
        tx = ?deployed.transaction_hash,
        block = ?deployed.block_number,
        "{name} deployed"
    );
    writeln!(out, "{name} contract deployed to:  {}", deployed.address)?;
    Ok(deployed)
}

pub mod arguments;
pub mod chain;
pub mod deployment;
pub mod traits;

use {
    anyhow::Result,
    arguments::Arguments,
    chain::Node,
    clap::Parser,
    contracts::Artifacts,
    traits::DeployedContract,
};

/// Parses the arguments, deploys the contract and exits the process with
/// status 1 if that fails.
pub async fn start(args: impl Iterator<Item = String>) {
    let args = Arguments::parse_from(args);
    observe::tracing::initialize(&observe::Config::new(
        &args.log_filter,
        args.use_json_logs,
    ));
    tracing::info!("running deployer with validated arguments:\n{}", args);

    if let Err(err) = run(args).await {
        tracing::error!(?err, "deployment failed");
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

pub async fn run(args: Arguments) -> Result<DeployedContract> {
    let artifacts = Artifacts::new(args.project_root);
    let node = Node::new(
        args.node_url,
        args.private_key,
        args.confirmations,
        args.confirmation_timeout,
    );
    deployment::deploy(
        &artifacts,
        &node,
        deployment::CONTRACT_NAME,
        &mut std::io::stdout(),
    )
    .await
}

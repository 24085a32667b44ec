use {
    alloy::signers::local::PrivateKeySigner,
    std::{
        fmt::{self, Display, Formatter},
        num::NonZeroU64,
        path::PathBuf,
        time::Duration,
    },
    url::Url,
};

/// Every argument has a default so the deployer runs without any, the way a
/// task runner invokes it.
#[derive(clap::Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to. Defaults to the node started by
    /// `npx hardhat node` or `anvil`.
    #[clap(long, env, default_value = "http://127.0.0.1:8545")]
    pub node_url: Url,

    /// Root of the Solidity project whose `artifacts/` (Hardhat) or `out/`
    /// (Foundry) directory holds the compiled contracts.
    #[clap(long, env, default_value = ".")]
    pub project_root: PathBuf,

    /// Hex encoded private key used to sign the deployment. Without one the
    /// deployment is sent from the first account the node manages.
    #[clap(long, env)]
    pub private_key: Option<PrivateKeySigner>,

    /// Number of blocks that have to include the deployment, counting the
    /// block it was mined in.
    #[clap(long, env, default_value = "1")]
    pub confirmations: NonZeroU64,

    /// How long to wait for the confirmations before giving up. Waits
    /// indefinitely if unset.
    #[clap(long, env, value_parser = humantime::parse_duration)]
    pub confirmation_timeout: Option<Duration>,

    #[clap(long, env, default_value = "warn,deployer=info,contracts=info")]
    pub log_filter: String,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub use_json_logs: bool,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            node_url,
            project_root,
            private_key,
            confirmations,
            confirmation_timeout,
            log_filter,
            use_json_logs,
        } = self;

        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "project_root: {}", project_root.display())?;
        display_secret_option(f, "private_key", private_key)?;
        writeln!(f, "confirmations: {confirmations}")?;
        display_option(
            f,
            "confirmation_timeout",
            &confirmation_timeout.map(humantime::format_duration),
        )?;
        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        Ok(())
    }
}

fn display_secret_option<T>(f: &mut Formatter<'_>, name: &str, option: &Option<T>) -> fmt::Result {
    display_option(f, name, &option.as_ref().map(|_| "SECRET"))
}

fn display_option(f: &mut Formatter<'_>, name: &str, option: &Option<impl Display>) -> fmt::Result {
    write!(f, "{name}: ")?;
    match option {
        Some(display) => writeln!(f, "{display}"),
        None => writeln!(f, "None"),
    }
}

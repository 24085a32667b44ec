//! Contract factories resolved from the JSON artifacts a Solidity toolchain
//! writes for every compiled contract.
//!
//! The artifacts are produced outside of this repository (`npx hardhat
//! compile` or `forge build`) and are only ever read here.

mod artifact;
pub mod artifacts;
pub mod factory;
pub mod paths;

use {
    alloy::primitives::hex,
    std::path::PathBuf,
};
pub use {artifacts::Artifacts, factory::ContractFactory, paths::Layout};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("artifact for contract {0:?} not found")]
    NotFound(String),
    #[error(
        "multiple artifacts for contract {name:?}, use one of these fully qualified names \
         instead: {}",
        .candidates.join(", ")
    )]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("contract {0:?} is abstract or an interface and has no creation code")]
    Abstract(String),
    #[error("contract {name:?} references unlinked libraries: {}", .libraries.join(", "))]
    Unlinked {
        name: String,
        libraries: Vec<String>,
    },
    #[error("constructor of contract {name:?} expects {expected} arguments but none were given")]
    ConstructorArguments { name: String, expected: usize },
    #[error("malformed artifact {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid bytecode in artifact {}", .path.display())]
    InvalidBytecode {
        path: PathBuf,
        #[source]
        source: hex::FromHexError,
    },
    #[error("failed to read artifact {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to search the artifact directory")]
    Walk(#[from] walkdir::Error),
}

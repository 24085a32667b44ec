use std::path::{Path, PathBuf};

/// Directory layouts of the supported Solidity toolchains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `artifacts/<source path>/<Contract>.json`
    Hardhat,
    /// `out/<source file name>/<Contract>.json`
    Foundry,
}

impl Layout {
    /// Layouts in the order they are searched.
    pub const ALL: [Self; 2] = [Self::Hardhat, Self::Foundry];

    pub fn dir(self) -> &'static str {
        match self {
            Self::Hardhat => "artifacts",
            Self::Foundry => "out",
        }
    }

    pub fn artifacts_dir(self, root: &Path) -> PathBuf {
        root.join(self.dir())
    }

    /// Location of the artifact for a fully qualified contract name such as
    /// `contracts/Voting.sol:Voting`.
    pub fn artifact_path(self, root: &Path, source: &str, contract: &str) -> Option<PathBuf> {
        let file = format!("{contract}.json");
        let dir = self.artifacts_dir(root);
        match self {
            Self::Hardhat => Some(dir.join(source).join(file)),
            // Foundry drops the directories of the source path.
            Self::Foundry => Some(dir.join(Path::new(source).file_name()?).join(file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_qualified_artifact_paths() {
        let root = Path::new("/project");
        assert_eq!(
            Layout::Hardhat.artifact_path(root, "contracts/Voting.sol", "Voting"),
            Some(PathBuf::from(
                "/project/artifacts/contracts/Voting.sol/Voting.json"
            ))
        );
        assert_eq!(
            Layout::Foundry.artifact_path(root, "src/Voting.sol", "Voting"),
            Some(PathBuf::from("/project/out/Voting.sol/Voting.json"))
        );
        assert_eq!(Layout::Foundry.artifact_path(root, "", "Voting"), None);
    }
}

use {
    crate::{Error, Layout, artifact, factory::ContractFactory},
    std::{
        fs,
        path::{Path, PathBuf},
    },
    walkdir::WalkDir,
};

/// Build metadata lives next to the artifacts but never describes a single
/// contract.
const BUILD_INFO_DIR: &str = "build-info";

/// Contract factory provider backed by the artifacts of a Solidity project.
#[derive(Clone, Debug)]
pub struct Artifacts {
    root: PathBuf,
}

/// An artifact file matching a requested contract name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Located {
    fully_qualified_name: String,
    contract: String,
    path: PathBuf,
}

impl Artifacts {
    /// Artifacts of the project rooted at `root`, i.e. the directory holding
    /// `hardhat.config.js` or `foundry.toml`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a contract name to a deployable factory.
    ///
    /// `name` is either the bare contract name (`Voting`) or a fully
    /// qualified one (`contracts/Voting.sol:Voting`). Hardhat artifacts are
    /// searched first, Foundry's only when Hardhat has none for the name.
    pub fn contract_factory(&self, name: &str) -> Result<ContractFactory, Error> {
        let mut found = self.find(name)?;
        let artifact = match found.len() {
            0 => return Err(Error::NotFound(name.to_owned())),
            1 => found.remove(0),
            _ => {
                return Err(Error::Ambiguous {
                    name: name.to_owned(),
                    candidates: found
                        .into_iter()
                        .map(|artifact| artifact.fully_qualified_name)
                        .collect(),
                });
            }
        };

        tracing::debug!(
            contract = %artifact.fully_qualified_name,
            path = %artifact.path.display(),
            "loading contract artifact"
        );
        let json = fs::read_to_string(&artifact.path).map_err(|source| Error::Io {
            path: artifact.path.clone(),
            source,
        })?;
        artifact::parse(&artifact.contract, &artifact.path, &json)
    }

    fn find(&self, name: &str) -> Result<Vec<Located>, Error> {
        for layout in Layout::ALL {
            let found = match name.rsplit_once(':') {
                Some((source, contract)) => self.find_qualified(layout, source, contract),
                None => self.find_bare(layout, name)?,
            };
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Ok(Vec::new())
    }

    fn find_qualified(&self, layout: Layout, source: &str, contract: &str) -> Vec<Located> {
        layout
            .artifact_path(&self.root, source, contract)
            .filter(|path| path.is_file())
            .map(|path| Located {
                fully_qualified_name: format!("{source}:{contract}"),
                contract: contract.to_owned(),
                path,
            })
            .into_iter()
            .collect()
    }

    fn find_bare(&self, layout: Layout, contract: &str) -> Result<Vec<Located>, Error> {
        let dir = layout.artifacts_dir(&self.root);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        // An exact file name match also skips Hardhat's `<Contract>.dbg.json`.
        let file_name = format!("{contract}.json");
        let mut found = Vec::new();
        for entry in WalkDir::new(&dir)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != BUILD_INFO_DIR)
        {
            let entry = entry?;
            if !entry.file_type().is_file() || entry.file_name() != file_name.as_str() {
                continue;
            }
            let Some(source) = entry
                .path()
                .parent()
                .and_then(|parent| parent.strip_prefix(&dir).ok())
            else {
                continue;
            };
            let source = source
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            found.push(Located {
                fully_qualified_name: format!("{source}:{contract}"),
                contract: contract.to_owned(),
                path: entry.into_path(),
            });
        }
        found.sort();
        Ok(found)
    }
}

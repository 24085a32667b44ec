//! Deserialization of single artifact files.
//!
//! Hardhat stores the creation code as a hex string next to a top level
//! `linkReferences` map while Foundry nests both in a `bytecode` object.

use {
    crate::{Error, factory::ContractFactory},
    alloy::{
        json_abi::JsonAbi,
        primitives::{Bytes, hex},
    },
    serde::Deserialize,
    std::{collections::BTreeMap, path::Path},
};

/// Source file -> library name -> placeholder offsets.
type LinkReferences = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    abi: JsonAbi,
    bytecode: Bytecode,
    #[serde(default)]
    link_references: LinkReferences,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Bytecode {
    Hex(String),
    Object {
        object: String,
        #[serde(default, rename = "linkReferences")]
        link_references: LinkReferences,
    },
}

/// Solidity leaves `__$<hash>$__` (or `__<Name>___` for old compilers) in
/// place of library addresses that still have to be linked.
const LIBRARY_PLACEHOLDER: &str = "__";

pub(crate) fn parse(name: &str, path: &Path, json: &str) -> Result<ContractFactory, Error> {
    let artifact: Artifact = serde_json::from_str(json).map_err(|source| Error::Malformed {
        path: path.to_owned(),
        source,
    })?;

    let (code, link_references) = match artifact.bytecode {
        Bytecode::Hex(code) => (code, artifact.link_references),
        Bytecode::Object {
            object,
            link_references,
        } => (object, link_references),
    };

    if code.contains(LIBRARY_PLACEHOLDER) || !link_references.is_empty() {
        let mut libraries: Vec<_> = link_references
            .into_iter()
            .flat_map(|(source, libraries)| {
                libraries
                    .into_keys()
                    .map(move |library| format!("{source}:{library}"))
            })
            .collect();
        if libraries.is_empty() {
            libraries.push("<unknown>".to_owned());
        }
        return Err(Error::Unlinked {
            name: name.to_owned(),
            libraries,
        });
    }

    let bytecode = hex::decode(code.trim()).map_err(|source| Error::InvalidBytecode {
        path: path.to_owned(),
        source,
    })?;
    if bytecode.is_empty() {
        return Err(Error::Abstract(name.to_owned()));
    }

    Ok(ContractFactory::new(
        name,
        artifact.abi,
        Bytes::from(bytecode),
    ))
}

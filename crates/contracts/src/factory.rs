use {
    crate::Error,
    alloy::{json_abi::JsonAbi, primitives::Bytes},
};

/// A compiled contract that can be deployed: its name, ABI and creation
/// code.
#[derive(Clone, Debug, PartialEq)]
pub struct ContractFactory {
    name: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

impl ContractFactory {
    pub fn new(name: impl Into<String>, abi: JsonAbi, bytecode: Bytes) -> Self {
        Self {
            name: name.into(),
            abi,
            bytecode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Creation code for a deployment without constructor arguments.
    ///
    /// Constructor arguments would be ABI-encoded and appended to the
    /// bytecode, so without any the creation code is the bytecode itself. A
    /// constructor that declares inputs can't be satisfied and is an error.
    pub fn deploy_code(&self) -> Result<Bytes, Error> {
        let expected = self
            .abi
            .constructor
            .as_ref()
            .map_or(0, |constructor| constructor.inputs.len());
        if expected > 0 {
            return Err(Error::ConstructorArguments {
                name: self.name.clone(),
                expected,
            });
        }
        Ok(self.bytecode.clone())
    }
}

//! The combined method registry.

use crate::{eth, personal, private, secretstore, ApiNamespace};
use ethdoc_types::MethodDescriptor;
use serde::Serialize;
use std::collections::HashSet;

/// Documentation module for one API namespace: an optional Markdown
/// preamble followed by the method table in documentation order.
#[derive(Clone, Debug, Serialize)]
pub struct ApiModule {
    /// Namespace the methods belong to.
    pub namespace: ApiNamespace,
    /// Markdown prepended before the method documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<&'static str>,
    /// Method descriptors.
    pub methods: Vec<MethodDescriptor>,
}

impl ApiModule {
    /// Creates an empty module for the namespace.
    pub fn new(namespace: ApiNamespace) -> Self {
        Self { namespace, preamble: None, methods: Vec::new() }
    }

    /// Sets the Markdown preamble.
    pub fn with_preamble(mut self, preamble: &'static str) -> Self {
        self.preamble = Some(preamble);
        self
    }

    /// Sets the method table.
    pub fn with_methods(mut self, methods: Vec<MethodDescriptor>) -> Self {
        self.methods = methods;
        self
    }

    /// Looks up a method by its bare name.
    pub fn get(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Qualified names of all methods in the module.
    pub fn qualified_names(&self) -> impl Iterator<Item = String> + '_ {
        self.methods.iter().map(|method| self.namespace.qualify(method.name))
    }
}

/// Error building a [`Registry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two descriptors share a name within one namespace.
    #[error("duplicate method `{name}` in namespace `{namespace}`")]
    DuplicateMethod {
        /// Namespace of the colliding descriptors.
        namespace: ApiNamespace,
        /// The duplicated bare method name.
        name: &'static str,
    },
    /// The same namespace was registered twice.
    #[error("namespace `{0}` registered twice")]
    DuplicateNamespace(ApiNamespace),
}

/// Combined catalogue of all documented namespaces.
///
/// A constructed registry always satisfies the uniqueness invariant:
/// duplicate namespaces or method names are rejected up front, and the
/// data is never mutated afterwards.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Registry {
    modules: Vec<ApiModule>,
}

impl Registry {
    /// Builds the full catalogue.
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_modules(vec![
            eth::module(),
            personal::module(),
            private::module(),
            secretstore::module(),
        ])
    }

    /// Builds a catalogue from the given modules, rejecting duplicates.
    pub fn from_modules(modules: Vec<ApiModule>) -> Result<Self, RegistryError> {
        let mut namespaces = HashSet::new();
        for module in &modules {
            if !namespaces.insert(module.namespace) {
                return Err(RegistryError::DuplicateNamespace(module.namespace))
            }
            let mut names = HashSet::new();
            for method in &module.methods {
                if !names.insert(method.name) {
                    return Err(RegistryError::DuplicateMethod {
                        namespace: module.namespace,
                        name: method.name,
                    })
                }
            }
        }
        Ok(Self { modules })
    }

    /// All modules, in registration order.
    pub fn modules(&self) -> &[ApiModule] {
        &self.modules
    }

    /// Module of the given namespace, if registered.
    pub fn module(&self, namespace: ApiNamespace) -> Option<&ApiModule> {
        self.modules.iter().find(|module| module.namespace == namespace)
    }

    /// Looks up a method by qualified name, e.g. `eth_call`.
    pub fn get(&self, qualified: &str) -> Option<&MethodDescriptor> {
        let (prefix, name) = qualified.split_once('_')?;
        let namespace = prefix.parse().ok()?;
        self.module(namespace)?.get(name)
    }

    /// All methods with their namespace, in documentation order.
    pub fn methods(&self) -> impl Iterator<Item = (ApiNamespace, &MethodDescriptor)> {
        self.modules.iter().flat_map(|module| {
            module.methods.iter().map(move |method| (module.namespace, method))
        })
    }

    /// Lowercased qualified names, the anchor set Markdown links resolve
    /// against.
    pub fn anchors(&self) -> HashSet<String> {
        self.methods()
            .map(|(namespace, method)| namespace.qualify(method.name).to_ascii_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethdoc_types::{MethodDescriptor, ReturnShape, TypeTag};

    fn descriptor(name: &'static str) -> MethodDescriptor {
        MethodDescriptor::new(name, "desc").returns(ReturnShape::new(TypeTag::Bool, "flag"))
    }

    #[test]
    fn rejects_duplicate_method_names() {
        let module = ApiModule::new(ApiNamespace::Eth)
            .with_methods(vec![descriptor("call"), descriptor("call")]);
        let err = Registry::from_modules(vec![module]).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateMethod { namespace: ApiNamespace::Eth, name: "call" }
        ));
    }

    #[test]
    fn rejects_duplicate_namespaces() {
        let modules =
            vec![ApiModule::new(ApiNamespace::Private), ApiModule::new(ApiNamespace::Private)];
        let err = Registry::from_modules(modules).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateNamespace(ApiNamespace::Private)));
    }

    #[test]
    fn same_bare_name_in_different_namespaces_is_fine() {
        let modules = vec![
            ApiModule::new(ApiNamespace::Eth).with_methods(vec![descriptor("sendTransaction")]),
            ApiModule::new(ApiNamespace::Personal).with_methods(vec![descriptor("sendTransaction")]),
        ];
        let registry = Registry::from_modules(modules).unwrap();
        assert!(registry.get("eth_sendTransaction").is_some());
        assert!(registry.get("personal_sendTransaction").is_some());
    }

    #[test]
    fn qualified_lookup() {
        let registry = Registry::new().unwrap();
        assert!(registry.get("eth_call").is_some());
        assert!(registry.get("personal_sign191").is_some());
        assert!(registry.get("secretstore_signRawHash").is_some());
        assert!(registry.get("eth_nonexistent").is_none());
        assert!(registry.get("web3_clientVersion").is_none());
        assert!(registry.get("noseparator").is_none());
    }

    #[test]
    fn anchors_are_lowercased() {
        let registry = Registry::new().unwrap();
        let anchors = registry.anchors();
        assert!(anchors.contains("eth_getblockbyhash"));
        assert!(anchors.contains("eth_getfilterchanges"));
        assert!(!anchors.contains("eth_getBlockByHash"));
    }
}

//! API namespace identifiers.

use serde::Serialize;
use std::fmt;
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr, VariantArray, VariantNames};

/// The API namespaces covered by the catalogue.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    IntoStaticStr,
    VariantNames,
    VariantArray,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApiNamespace {
    /// `eth_` namespace: chain state, filters, mining and signing.
    Eth,
    /// `personal_` namespace: account management and signing.
    Personal,
    /// `private_` namespace: private contract transactions.
    Private,
    /// `secretstore_` namespace: secret store encryption sessions.
    SecretStore,
}

impl ApiNamespace {
    /// Wire prefix of the namespace, e.g. `eth`.
    pub fn prefix(&self) -> &'static str {
        (*self).into()
    }

    /// Namespace-qualified method name, e.g. `eth_call`.
    pub fn qualify(&self, method: &str) -> String {
        format!("{}_{method}", self.prefix())
    }
}

impl fmt::Display for ApiNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn prefixes_are_lowercase() {
        assert_eq!(ApiNamespace::Eth.prefix(), "eth");
        assert_eq!(ApiNamespace::SecretStore.prefix(), "secretstore");
    }

    #[test]
    fn qualifies_method_names() {
        assert_eq!(ApiNamespace::Eth.qualify("call"), "eth_call");
        assert_eq!(ApiNamespace::Personal.qualify("sign191"), "personal_sign191");
    }

    #[test]
    fn parses_from_prefix() {
        for namespace in ApiNamespace::iter() {
            assert_eq!(namespace.prefix().parse::<ApiNamespace>().unwrap(), namespace);
        }
        assert!("web3".parse::<ApiNamespace>().is_err());
    }
}

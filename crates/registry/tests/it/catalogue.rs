//! Whole-catalogue checks.

use ethdoc_registry::{ApiNamespace, Registry};
use ethdoc_types::{Returns, TypeTag};
use similar_asserts::assert_eq;

#[test]
fn builds_all_namespaces() {
    let registry = Registry::new().unwrap();
    let namespaces: Vec<_> = registry.modules().iter().map(|module| module.namespace).collect();
    assert_eq!(
        namespaces,
        [ApiNamespace::Eth, ApiNamespace::Personal, ApiNamespace::Private, ApiNamespace::SecretStore]
    );
}

#[test]
fn per_namespace_method_counts() {
    let registry = Registry::new().unwrap();
    let count = |namespace| registry.module(namespace).unwrap().methods.len();
    assert_eq!(count(ApiNamespace::Eth), 53);
    assert_eq!(count(ApiNamespace::Personal), 9);
    assert_eq!(count(ApiNamespace::Private), 2);
    assert_eq!(count(ApiNamespace::SecretStore), 6);
}

#[test]
fn preambles_where_the_docs_carry_them() {
    let registry = Registry::new().unwrap();
    let preamble = |namespace| registry.module(namespace).unwrap().preamble;
    assert!(preamble(ApiNamespace::Eth).unwrap().contains("default block parameter"));
    assert!(preamble(ApiNamespace::SecretStore).unwrap().contains("must be enabled with caution"));
    assert!(preamble(ApiNamespace::Personal).is_none());
    assert!(preamble(ApiNamespace::Private).is_none());
}

#[test]
fn cross_references_point_at_existing_anchors() {
    let registry = Registry::new().unwrap();
    let anchors = registry.anchors();
    for (namespace, method) in registry.methods() {
        if let Returns::SeeAlso(reference) = &method.returns {
            let anchor = reference
                .split_once("(#")
                .and_then(|(_, rest)| rest.split_once(')'))
                .map(|(anchor, _)| anchor.to_ascii_lowercase())
                .unwrap_or_else(|| panic!("{} has a malformed reference", namespace.qualify(method.name)));
            assert!(anchors.contains(&anchor), "{}: dangling `#{anchor}`", namespace.qualify(method.name));
        }
    }
}

#[test]
fn composite_params_resolve_their_fields() {
    let registry = Registry::new().unwrap();
    let call = registry.get("eth_call").unwrap();
    assert_eq!(call.params[0].type_tag, TypeTag::CallRequest);
    assert!(call.params[0].fields.is_empty());
    assert_eq!(call.params[0].type_tag.fields().unwrap().len(), 6);

    let new_filter = registry.get("eth_newFilter").unwrap();
    assert_eq!(new_filter.params[0].type_tag, TypeTag::Object);
    assert_eq!(new_filter.params[0].fields.len(), 5);
}

#[test]
fn serializes_every_qualified_name() {
    let registry = Registry::new().unwrap();
    let dump = serde_json::to_value(&registry).unwrap();
    let modules = dump.as_array().unwrap();
    assert_eq!(modules.len(), 4);
    for (module_value, module) in modules.iter().zip(registry.modules()) {
        assert_eq!(module_value["namespace"], module.namespace.prefix());
        let methods = module_value["methods"].as_array().unwrap();
        assert_eq!(methods.len(), module.methods.len());
        for (value, method) in methods.iter().zip(&module.methods) {
            assert_eq!(value["name"], method.name);
        }
    }
}

#[test]
fn personal_sign191_references_the_eip191_tag() {
    let registry = Registry::new().unwrap();
    let sign191 = registry.get("personal_sign191").unwrap();
    assert_eq!(sign191.params[1].type_tag, TypeTag::Eip191);
    assert_eq!(sign191.params[1].type_tag.print(), "`EIP712` or `Data` or `PresignedTransaction`");
}

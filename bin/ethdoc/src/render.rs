//! Markdown rendering of the catalogue.
//!
//! The walk follows the descriptor structure: the namespace preamble first,
//! then per method a heading, the description, parameter and return
//! sections, and a request/response example assembled from the descriptor
//! examples. Methods marked `nodoc` are skipped; methods carrying a
//! `subdoc` label are collected into their own document.

use ethdoc_registry::{ApiModule, ApiNamespace};
use ethdoc_types::{Example, Field, MethodDescriptor, Param, ReturnShape, Returns};
use serde_json::json;
use std::collections::BTreeMap;

/// Rendered Markdown for one namespace: the main document plus any
/// sub-documents keyed by their `subdoc` label.
#[derive(Debug)]
pub(crate) struct RenderedModule {
    /// The namespace document.
    pub(crate) main: String,
    /// Sub-documents, e.g. `pubsub`.
    pub(crate) subdocs: BTreeMap<&'static str, String>,
}

/// Renders a namespace module to Markdown.
pub(crate) fn render_module(module: &ApiModule) -> RenderedModule {
    let mut main = format!("# The `{}` API\n", module.namespace);
    if let Some(preamble) = module.preamble {
        main.push('\n');
        main.push_str(preamble.trim());
        main.push('\n');
    }
    let mut subdocs: BTreeMap<&'static str, String> = BTreeMap::new();
    for method in &module.methods {
        if method.nodoc.is_some() {
            continue
        }
        let target = match method.subdoc {
            Some(subdoc) => subdocs
                .entry(subdoc)
                .or_insert_with(|| format!("# The `{}` API: {subdoc}\n", module.namespace)),
            None => &mut main,
        };
        render_method(target, module.namespace, method);
    }
    RenderedModule { main, subdocs }
}

fn render_method(out: &mut String, namespace: ApiNamespace, method: &MethodDescriptor) {
    let qualified = namespace.qualify(method.name);
    out.push_str(&format!("\n## {qualified}\n\n{}\n", method.desc.trim()));

    out.push_str("\n#### Parameters\n\n");
    if method.params.is_empty() {
        out.push_str("None\n");
    } else {
        for (index, param) in method.params.iter().enumerate() {
            let optional = if param.optional { " (optional)" } else { "" };
            out.push_str(&format!(
                "{}. {}{optional} - {}\n",
                index + 1,
                param.type_tag.print(),
                param.desc.trim()
            ));
            render_fields(out, &param_fields(param), 1);
        }
    }

    out.push_str("\n#### Returns\n\n");
    match &method.returns {
        Returns::SeeAlso(reference) => {
            out.push_str(reference.trim());
            out.push('\n');
        }
        Returns::Shape(shape) => {
            out.push_str(&format!("- {} - {}\n", shape.type_tag.print(), shape.desc.trim()));
            render_fields(out, &shape_fields(shape), 1);
        }
    }

    render_example(out, &qualified, method);
}

/// Inline fields win over the composite tag's own shape.
fn param_fields(param: &Param) -> Vec<Field> {
    if param.fields.is_empty() {
        param.type_tag.fields().unwrap_or_default()
    } else {
        param.fields.clone()
    }
}

fn shape_fields(shape: &ReturnShape) -> Vec<Field> {
    if shape.fields.is_empty() {
        shape.type_tag.fields().unwrap_or_default()
    } else {
        shape.fields.clone()
    }
}

fn render_fields(out: &mut String, fields: &[Field], depth: usize) {
    for field in fields {
        let optional = if field.optional { " (optional)" } else { "" };
        out.push_str(&"    ".repeat(depth));
        out.push_str(&format!(
            "- `{}`: {}{optional} - {}\n",
            field.name,
            field.type_tag.print(),
            field.desc.trim()
        ));
        render_fields(out, &field.fields, depth + 1);
    }
}

/// Request/response example. The request needs an example for every
/// required parameter; optional parameters without one are dropped from
/// the tail, mirroring how the docs quote partial calls.
fn render_example(out: &mut String, qualified: &str, method: &MethodDescriptor) {
    let mut params = Vec::new();
    let mut complete = true;
    for param in &method.params {
        match &param.example {
            Some(example) => params.push(example.to_plain_value()),
            None if param.optional => break,
            None => {
                complete = false;
                break
            }
        }
    }
    if !complete {
        return
    }

    let request = json!({
        "method": qualified,
        "params": params,
        "id": 1,
        "jsonrpc": "2.0"
    });
    out.push_str("\n#### Example\n\nRequest\n```bash\ncurl --data '");
    out.push_str(&request.to_string());
    out.push_str("' -H \"Content-Type: application/json\" -X POST localhost:8545\n```\n");

    if let Returns::Shape(shape) = &method.returns {
        if let Some(example) = &shape.example {
            let response = Example::object(vec![
                ("id", Example::from(json!(1))),
                ("jsonrpc", Example::from(json!("2.0"))),
                ("result", example.clone()),
            ]);
            out.push_str("\nResponse\n```js\n");
            out.push_str(&response.render());
            out.push_str("\n```\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethdoc_registry::{ApiModule, Registry};
    use ethdoc_types::{from_decimal, Param, ReturnShape, TypeTag};
    use similar_asserts::assert_eq;

    #[test]
    fn renders_a_simple_method() {
        let module = ApiModule::new(ApiNamespace::Eth).with_methods(vec![MethodDescriptor::new(
            "blockNumber",
            "Returns the number of most recent block.",
        )
        .returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the current block number the client is on.")
                .with_example(from_decimal(1207)),
        )]);
        let rendered = render_module(&module);
        assert!(rendered.subdocs.is_empty());
        assert_eq!(
            rendered.main,
            "# The `eth` API\n\n\
             ## eth_blockNumber\n\n\
             Returns the number of most recent block.\n\n\
             #### Parameters\n\nNone\n\n\
             #### Returns\n\n\
             - `Quantity` - integer of the current block number the client is on.\n\n\
             #### Example\n\n\
             Request\n```bash\n\
             curl --data '{\"method\":\"eth_blockNumber\",\"params\":[],\"id\":1,\"jsonrpc\":\"2.0\"}' -H \"Content-Type: application/json\" -X POST localhost:8545\n\
             ```\n\n\
             Response\n```js\n\
             {\n  \"id\": 1,\n  \"jsonrpc\": \"2.0\",\n  \"result\": \"0x4b7\"\n}\n\
             ```\n"
        );
    }

    #[test]
    fn composite_parameters_list_their_fields() {
        let module = ApiModule::new(ApiNamespace::Eth).with_methods(vec![MethodDescriptor::new(
            "call",
            "Executes a new message call.",
        )
        .with_param(Param::new(TypeTag::CallRequest, "The transaction call object."))
        .returns(ReturnShape::new(TypeTag::Data, "the return value of executed contract."))]);
        let main = render_module(&module).main;
        assert!(main.contains("1. `Object` - The transaction call object."));
        assert!(main.contains("    - `from`: `Address` (optional) - 20 Bytes - The address the transaction is send from."));
        assert!(main.contains("    - `gasPrice`: `Quantity` (optional) - Integer of the gas price used for each paid gas."));
    }

    #[test]
    fn optional_parameters_without_example_are_dropped_from_the_request() {
        let module = ApiModule::new(ApiNamespace::Eth).with_methods(vec![MethodDescriptor::new(
            "getBalance",
            "Returns the balance of the account of given address.",
        )
        .with_param(
            Param::new(TypeTag::Address, "20 Bytes - address to check for balance.")
                .with_example(serde_json::json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1")),
        )
        .with_param(Param::new(TypeTag::BlockNumber, "integer block number.").optional())
        .returns(
            ReturnShape::new(TypeTag::Quantity, "integer of the current balance in wei.")
                .with_example(serde_json::json!("0x0234c8a3397aab58")),
        )]);
        let main = render_module(&module).main;
        assert!(main.contains(
            "curl --data '{\"method\":\"eth_getBalance\",\"params\":[\"0x407d73d8a49eeb85d32cf465507dd71d507100c1\"],\"id\":1,\"jsonrpc\":\"2.0\"}'"
        ));
    }

    #[test]
    fn methods_without_examples_get_no_example_section() {
        let module = ApiModule::new(ApiNamespace::Eth).with_methods(vec![MethodDescriptor::new(
            "mystery",
            "desc",
        )
        .with_param(Param::new(TypeTag::Data, "undocumented"))
        .returns(ReturnShape::new(TypeTag::Bool, "flag"))]);
        assert!(!render_module(&module).main.contains("#### Example"));
    }

    #[test]
    fn nodoc_methods_are_skipped_and_subdocs_split_out() {
        let registry = Registry::new().unwrap();
        let eth = registry.module(ApiNamespace::Eth).unwrap();
        let rendered = render_module(eth);
        assert!(!rendered.main.contains("eth_fetchQueuedTransactions"));
        assert!(!rendered.main.contains("## eth_subscribe"));
        let pubsub = rendered.subdocs.get("pubsub").unwrap();
        assert!(pubsub.contains("## eth_subscribe"));
        assert!(pubsub.contains("## eth_unsubscribe"));
    }

    #[test]
    fn response_examples_keep_inline_comments() {
        let registry = Registry::new().unwrap();
        let eth = registry.module(ApiNamespace::Eth).unwrap();
        let rendered = render_module(eth);
        assert!(rendered.main.contains("\"to\": null, // value is null because this example transaction is a contract creation"));
    }

    #[test]
    fn cross_references_render_verbatim() {
        let registry = Registry::new().unwrap();
        let eth = registry.module(ApiNamespace::Eth).unwrap();
        let rendered = render_module(eth);
        assert!(rendered.main.contains("See [eth_getBlockByHash](#eth_getblockbyhash)"));
    }
}

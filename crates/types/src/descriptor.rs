//! Method, parameter and return descriptors.

use crate::{Example, TypeTag};
use serde::Serialize;

/// Named member of a composite shape.
#[derive(Clone, Debug, Serialize)]
pub struct Field {
    /// Field name as it appears in the JSON object.
    pub name: &'static str,
    /// Shape of the field value.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Human readable description.
    pub desc: &'static str,
    /// Whether the field may be omitted.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    /// Default value noted in the docs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Example>,
    /// Illustrative value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Example>,
    /// Nested members, for fields that are themselves objects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Field {
    /// Creates a required field.
    pub fn new(name: &'static str, type_tag: TypeTag, desc: &'static str) -> Self {
        Self { name, type_tag, desc, optional: false, default: None, example: None, fields: Vec::new() }
    }

    /// Marks the field optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the documented default value.
    pub fn with_default(mut self, default: impl Into<Example>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Attaches an example value.
    pub fn with_example(mut self, example: impl Into<Example>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Attaches nested members.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}

/// Positional parameter of an RPC method.
#[derive(Clone, Debug, Serialize)]
pub struct Param {
    /// Shape of the parameter.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Human readable description.
    pub desc: &'static str,
    /// Client-side formatter historically applied to the value. Opaque
    /// metadata for the generator, e.g. `inputCallFormatter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    /// Whether the parameter may be omitted. Optional parameters trail
    /// required ones; the linter enforces this.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    /// Default value applied when the parameter is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Example>,
    /// Illustrative value used in the request example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Example>,
    /// Inline shape description for object parameters that are not backed
    /// by a composite [`TypeTag`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Param {
    /// Creates a required parameter.
    pub fn new(type_tag: TypeTag, desc: &'static str) -> Self {
        Self {
            type_tag,
            desc,
            format: None,
            optional: false,
            default: None,
            example: None,
            fields: Vec::new(),
        }
    }

    /// Records the client-side formatter name.
    pub fn format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }

    /// Marks the parameter optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the documented default value.
    pub fn with_default(mut self, default: impl Into<Example>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Attaches an example value.
    pub fn with_example(mut self, example: impl Into<Example>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Attaches an inline shape description.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}

/// Inline shape of a return value.
#[derive(Clone, Debug, Serialize)]
pub struct ReturnShape {
    /// Shape of the returned value.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Human readable description.
    pub desc: &'static str,
    /// Client-side formatter historically applied to the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    /// Illustrative value used in the response example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Example>,
    /// Inline shape description for object returns.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl ReturnShape {
    /// Creates a return shape.
    pub fn new(type_tag: TypeTag, desc: &'static str) -> Self {
        Self { type_tag, desc, format: None, example: None, fields: Vec::new() }
    }

    /// Records the client-side formatter name.
    pub fn format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }

    /// Attaches an example value.
    pub fn with_example(mut self, example: impl Into<Example>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Attaches an inline shape description.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}

/// Return value of an RPC method: either an inline shape or a
/// cross-reference to another method's documentation.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Returns {
    /// Inline shape.
    Shape(ReturnShape),
    /// Markdown cross-reference, e.g.
    /// `See [eth_getBlockByHash](#eth_getblockbyhash)`. The linter resolves
    /// the anchor against the registry.
    SeeAlso(&'static str),
}

impl From<ReturnShape> for Returns {
    fn from(shape: ReturnShape) -> Self {
        Returns::Shape(shape)
    }
}

impl From<&'static str> for Returns {
    fn from(reference: &'static str) -> Self {
        Returns::SeeAlso(reference)
    }
}

/// Static description of one RPC method, identified by its bare name; the
/// namespace qualifies it (`call` documents `eth_call` inside the `eth`
/// module). Defined once at load time, never mutated.
#[derive(Clone, Debug, Serialize)]
pub struct MethodDescriptor {
    /// Bare method name.
    pub name: &'static str,
    /// Human readable description, Markdown.
    pub desc: &'static str,
    /// Positional parameters.
    pub params: Vec<Param>,
    /// Return value.
    pub returns: Returns,
    /// Sub-document the method is rendered into instead of the main
    /// namespace document, e.g. `pubsub`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdoc: Option<&'static str>,
    /// Whether the method is a subscription endpoint.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pubsub: bool,
    /// Reason the method is excluded from rendered docs, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodoc: Option<&'static str>,
}

impl MethodDescriptor {
    /// Creates a descriptor with no parameters.
    pub fn new(name: &'static str, desc: &'static str) -> Self {
        Self {
            name,
            desc,
            params: Vec::new(),
            returns: Returns::SeeAlso(""),
            subdoc: None,
            pubsub: false,
            nodoc: None,
        }
    }

    /// Appends a parameter.
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Sets the return value.
    pub fn returns(mut self, returns: impl Into<Returns>) -> Self {
        self.returns = returns.into();
        self
    }

    /// Moves the method into a sub-document.
    pub fn in_subdoc(mut self, subdoc: &'static str) -> Self {
        self.subdoc = Some(subdoc);
        self
    }

    /// Marks the method as a subscription endpoint.
    pub fn pubsub(mut self) -> Self {
        self.pubsub = true;
        self
    }

    /// Excludes the method from rendered docs with a reason.
    pub fn nodoc(mut self, reason: &'static str) -> Self {
        self.nodoc = Some(reason);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use similar_asserts::assert_eq;

    #[test]
    fn builder_defaults() {
        let method = MethodDescriptor::new("blockNumber", "Returns the number of most recent block.")
            .returns(ReturnShape::new(
                TypeTag::Quantity,
                "integer of the current block number the client is on.",
            ));
        assert!(method.params.is_empty());
        assert!(!method.pubsub);
        assert!(method.subdoc.is_none());
        assert!(method.nodoc.is_none());
    }

    #[test]
    fn serializes_without_empty_slots() {
        let method = MethodDescriptor::new("getBalance", "Returns the balance.")
            .with_param(
                Param::new(TypeTag::Address, "20 Bytes - address to check for balance.")
                    .format("inputAddressFormatter")
                    .with_example(json!("0x407d73d8a49eeb85d32cf465507dd71d507100c1")),
            )
            .with_param(
                Param::new(TypeTag::BlockNumber, "integer block number.")
                    .format("inputDefaultBlockNumberFormatter")
                    .optional(),
            )
            .returns(ReturnShape::new(TypeTag::Quantity, "integer of the current balance in wei."));

        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({
                "name": "getBalance",
                "desc": "Returns the balance.",
                "params": [
                    {
                        "type": "Address",
                        "desc": "20 Bytes - address to check for balance.",
                        "format": "inputAddressFormatter",
                        "example": "0x407d73d8a49eeb85d32cf465507dd71d507100c1"
                    },
                    {
                        "type": "BlockNumber",
                        "desc": "integer block number.",
                        "format": "inputDefaultBlockNumberFormatter",
                        "optional": true
                    }
                ],
                "returns": {
                    "type": "Quantity",
                    "desc": "integer of the current balance in wei."
                }
            })
        );
    }

    #[test]
    fn cross_reference_serializes_as_string() {
        let method = MethodDescriptor::new("getBlockByNumber", "Returns information about a block.")
            .returns("See [eth_getBlockByHash](#eth_getblockbyhash)");
        let value = serde_json::to_value(&method).unwrap();
        assert_eq!(value["returns"], json!("See [eth_getBlockByHash](#eth_getblockbyhash)"));
    }

    #[test]
    fn nested_fields_serialize_recursively() {
        let field = Field::new("tx", TypeTag::Object, "Transaction object:")
            .with_fields(vec![Field::new("hash", TypeTag::Hash, "32 Bytes - hash of the transaction.")]);
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["fields"][0]["type"], json!("Hash"));
    }
}

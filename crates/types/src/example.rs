//! Annotated example values.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Illustrative value attached to a parameter, return shape or field.
///
/// Examples form a tree rather than plain JSON because the docs annotate
/// individual members with inline `// comments` and use `{ ... }` style
/// placeholders where a full value would add nothing. Plain JSON is enough
/// for most entries; the other variants only appear where an annotation is
/// attached somewhere inside the value.
#[derive(Clone, Debug, PartialEq)]
pub enum Example {
    /// Plain JSON value.
    Value(Value),
    /// Value annotated with an inline `// comment`.
    Commented {
        /// The annotated value.
        value: Box<Example>,
        /// Comment rendered after the value.
        comment: &'static str,
    },
    /// Raw placeholder text rendered verbatim, e.g. `{ ... }`.
    Literal(&'static str),
    /// Array whose members may carry their own annotations.
    Array(Vec<Example>),
    /// Object whose members may carry their own annotations.
    Object(Vec<(&'static str, Example)>),
}

impl Example {
    /// Annotates a value with an inline comment.
    pub fn commented(value: impl Into<Example>, comment: &'static str) -> Self {
        Example::Commented { value: Box::new(value.into()), comment }
    }

    /// Raw placeholder text, rendered without quoting.
    pub fn literal(text: &'static str) -> Self {
        Example::Literal(text)
    }

    /// Array of examples.
    pub fn array(items: Vec<Example>) -> Self {
        Example::Array(items)
    }

    /// Object of named examples, in documentation order.
    pub fn object(entries: Vec<(&'static str, Example)>) -> Self {
        Example::Object(entries)
    }

    /// Plain JSON with annotations stripped and literals kept as strings.
    ///
    /// Machine export has no comment channel; comments only survive in
    /// rendered Markdown.
    pub fn to_plain_value(&self) -> Value {
        match self {
            Example::Value(value) => value.clone(),
            Example::Commented { value, .. } => value.to_plain_value(),
            Example::Literal(text) => Value::String((*text).to_owned()),
            Example::Array(items) => {
                Value::Array(items.iter().map(Example::to_plain_value).collect())
            }
            Example::Object(entries) => Value::Object(
                entries.iter().map(|(name, value)| ((*name).to_owned(), value.to_plain_value())).collect(),
            ),
        }
    }

    /// Renders the example as JSON text with inline comments preserved.
    pub fn render(&self) -> String {
        self.render_indented(0)
    }

    /// Same as [`Example::render`], with continuation lines indented by
    /// `indent` two-space levels so the text can be embedded in a larger
    /// JSON block.
    pub fn render_indented(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, indent, false);
        out
    }

    fn write(&self, out: &mut String, indent: usize, trailing_comma: bool) {
        match self {
            Example::Value(value) => {
                push_value(out, value, indent);
                if trailing_comma {
                    out.push(',');
                }
            }
            Example::Literal(text) => {
                out.push_str(text);
                if trailing_comma {
                    out.push(',');
                }
            }
            Example::Commented { value, comment } => {
                value.write(out, indent, trailing_comma);
                out.push_str(" // ");
                out.push_str(comment);
            }
            Example::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                } else {
                    out.push_str("[\n");
                    for (i, item) in items.iter().enumerate() {
                        push_indent(out, indent + 1);
                        item.write(out, indent + 1, i + 1 < items.len());
                        out.push('\n');
                    }
                    push_indent(out, indent);
                    out.push(']');
                }
                if trailing_comma {
                    out.push(',');
                }
            }
            Example::Object(entries) => {
                if entries.is_empty() {
                    out.push_str("{}");
                } else {
                    out.push_str("{\n");
                    for (i, (name, value)) in entries.iter().enumerate() {
                        push_indent(out, indent + 1);
                        out.push('"');
                        out.push_str(name);
                        out.push_str("\": ");
                        value.write(out, indent + 1, i + 1 < entries.len());
                        out.push('\n');
                    }
                    push_indent(out, indent);
                    out.push('}');
                }
                if trailing_comma {
                    out.push(',');
                }
            }
        }
    }
}

impl From<Value> for Example {
    fn from(value: Value) -> Self {
        Example::Value(value)
    }
}

impl From<String> for Example {
    fn from(value: String) -> Self {
        Example::Value(Value::String(value))
    }
}

impl Serialize for Example {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_plain_value().serialize(serializer)
    }
}

/// Hex string of a decimal value, as the docs quote quantities: `0x4b7`.
pub fn from_decimal(value: u64) -> String {
    format!("{value:#x}")
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

fn push_value(out: &mut String, value: &Value, indent: usize) {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            push_indent(out, indent);
        }
        out.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use similar_asserts::assert_eq;

    #[test]
    fn from_decimal_quotes_hex() {
        assert_eq!(from_decimal(1207), "0x4b7");
        assert_eq!(from_decimal(0), "0x0");
        assert_eq!(from_decimal(21000), "0x5208");
    }

    #[test]
    fn renders_plain_values() {
        assert_eq!(Example::from(json!("0x0")).render(), "\"0x0\"");
        assert_eq!(Example::from(json!(true)).render(), "true");
        assert_eq!(Example::from(json!(null)).render(), "null");
    }

    #[test]
    fn renders_comments_after_values() {
        let example = Example::commented(json!(null), "value is null for contract creation");
        assert_eq!(example.render(), "null // value is null for contract creation");
    }

    #[test]
    fn renders_literals_verbatim() {
        assert_eq!(Example::literal("{ ... }").render(), "{ ... }");
    }

    #[test]
    fn renders_annotated_arrays() {
        let example = Example::array(vec![
            Example::commented(json!("0xaa"), "first"),
            Example::literal("..."),
        ]);
        assert_eq!(example.render(), "[\n  \"0xaa\", // first\n  ...\n]");
    }

    #[test]
    fn renders_annotated_objects_with_nested_indent() {
        let example = Example::object(vec![
            ("result", Example::object(vec![("status", Example::commented(json!("0x1"), "success"))])),
            ("id", Example::from(json!(1))),
        ]);
        assert_eq!(
            example.render(),
            "{\n  \"result\": {\n    \"status\": \"0x1\" // success\n  },\n  \"id\": 1\n}"
        );
    }

    #[test]
    fn comma_precedes_comment() {
        let example = Example::object(vec![
            ("to", Example::commented(json!(null), "contract creation")),
            ("gasUsed", Example::from(json!("0xba2e6"))),
        ]);
        assert_eq!(
            example.render(),
            "{\n  \"to\": null, // contract creation\n  \"gasUsed\": \"0xba2e6\"\n}"
        );
    }

    #[test]
    fn plain_value_strips_annotations() {
        let example = Example::object(vec![
            ("logs", Example::commented(json!([]), "as returned by eth_getFilterLogs")),
            ("tx", Example::literal("{ ... }")),
        ]);
        assert_eq!(example.to_plain_value(), json!({ "logs": [], "tx": "{ ... }" }));
    }

    #[test]
    fn serializes_to_plain_json() {
        let example = Example::commented(json!({ "block": 1 }), "or a timestamp");
        assert_eq!(serde_json::to_value(&example).unwrap(), json!({ "block": 1 }));
    }
}

//! Schema-integrity checks run over the catalogue by a documentation build.
//!
//! Nothing here validates JSON-RPC traffic; the checks are reference
//! integrity of the static descriptors themselves: descriptions present,
//! optional parameters trailing required ones, cross-references resolving
//! to a method that exists. Violations are collected rather than failing
//! fast so a build reports everything at once.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use ethdoc_registry::{ApiNamespace, Registry};
use ethdoc_types::{Field, MethodDescriptor, Returns};
use std::{collections::HashSet, fmt};

/// Single integrity violation found in the catalogue.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// Method description is empty or a placeholder.
    #[error("{method}: missing description")]
    MissingMethodDesc {
        /// Qualified name of the offending method.
        method: String,
    },
    /// Parameter description is empty or a placeholder.
    #[error("{method}: parameter {index} has no description")]
    MissingParamDesc {
        /// Qualified name of the offending method.
        method: String,
        /// Zero-based parameter position.
        index: usize,
    },
    /// Return description is empty.
    #[error("{method}: return value has no description")]
    MissingReturnsDesc {
        /// Qualified name of the offending method.
        method: String,
    },
    /// Field description is empty.
    #[error("{method}: field `{field}` has no description")]
    MissingFieldDesc {
        /// Qualified name of the offending method.
        method: String,
        /// Name of the offending field.
        field: String,
    },
    /// A required parameter follows an optional one, which a positional
    /// call encoding cannot express.
    #[error("{method}: required parameter {index} follows an optional parameter")]
    RequiredAfterOptional {
        /// Qualified name of the offending method.
        method: String,
        /// Zero-based position of the required parameter.
        index: usize,
    },
    /// Cross-reference points at a method that does not exist.
    #[error("{method}: cross-reference `#{anchor}` does not resolve")]
    DanglingReference {
        /// Qualified name of the offending method.
        method: String,
        /// The unresolved anchor.
        anchor: String,
    },
}

/// Outcome of linting a [`Registry`].
#[derive(Clone, Debug, Default)]
pub struct LintReport {
    violations: Vec<Violation>,
}

impl LintReport {
    /// `true` when no violations were found.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations, in catalogue order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Checks every descriptor in the registry.
pub fn check(registry: &Registry) -> LintReport {
    let anchors = registry.anchors();
    let mut violations = Vec::new();
    for module in registry.modules() {
        for method in &module.methods {
            check_method(module.namespace, method, &anchors, &mut violations);
        }
    }
    LintReport { violations }
}

fn check_method(
    namespace: ApiNamespace,
    method: &MethodDescriptor,
    anchors: &HashSet<String>,
    out: &mut Vec<Violation>,
) {
    let qualified = namespace.qualify(method.name);
    // Methods excluded from the rendered docs keep placeholder
    // descriptions; everything else about them is still checked.
    let documented = method.nodoc.is_none();

    if documented && is_placeholder(method.desc) {
        out.push(Violation::MissingMethodDesc { method: qualified.clone() });
    }

    let mut seen_optional = false;
    for (index, param) in method.params.iter().enumerate() {
        if param.optional {
            seen_optional = true;
        } else if seen_optional {
            out.push(Violation::RequiredAfterOptional { method: qualified.clone(), index });
        }
        if documented && is_placeholder(param.desc) {
            out.push(Violation::MissingParamDesc { method: qualified.clone(), index });
        }
        check_fields(&qualified, &param.fields, out);
    }

    match &method.returns {
        Returns::Shape(shape) => {
            if is_placeholder(shape.desc) {
                out.push(Violation::MissingReturnsDesc { method: qualified.clone() });
            }
            check_fields(&qualified, &shape.fields, out);
        }
        Returns::SeeAlso(reference) => {
            let targets = anchor_targets(reference);
            if targets.is_empty() {
                out.push(Violation::MissingReturnsDesc { method: qualified });
            } else {
                for anchor in targets {
                    if !anchors.contains(&anchor) {
                        out.push(Violation::DanglingReference {
                            method: qualified.clone(),
                            anchor,
                        });
                    }
                }
            }
        }
    }
}

fn check_fields(qualified: &str, fields: &[Field], out: &mut Vec<Violation>) {
    for field in fields {
        if is_placeholder(field.desc) {
            out.push(Violation::MissingFieldDesc {
                method: qualified.to_owned(),
                field: field.name.to_owned(),
            });
        }
        check_fields(qualified, &field.fields, out);
    }
}

fn is_placeholder(desc: &str) -> bool {
    let desc = desc.trim();
    desc.is_empty() || desc == "?"
}

/// Extracts the lowercased `(#anchor)` targets of a Markdown reference.
fn anchor_targets(reference: &str) -> Vec<String> {
    let mut targets = Vec::new();
    let mut rest = reference;
    while let Some(start) = rest.find("(#") {
        rest = &rest[start + 2..];
        match rest.find(')') {
            Some(end) => {
                targets.push(rest[..end].to_ascii_lowercase());
                rest = &rest[end + 1..];
            }
            None => break,
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethdoc_registry::ApiModule;
    use ethdoc_types::{Param, ReturnShape, TypeTag};
    use similar_asserts::assert_eq;

    fn module_of(methods: Vec<MethodDescriptor>) -> Registry {
        Registry::from_modules(vec![ApiModule::new(ApiNamespace::Eth).with_methods(methods)])
            .unwrap()
    }

    #[test]
    fn the_full_catalogue_is_clean() {
        let registry = Registry::new().unwrap();
        let report = check(&registry);
        assert_eq!(report.violations(), &[], "{report}");
        assert!(report.is_clean());
    }

    #[test]
    fn flags_missing_method_description() {
        let registry = module_of(vec![MethodDescriptor::new("mystery", "")
            .returns(ReturnShape::new(TypeTag::Bool, "whether the call was successful"))]);
        let report = check(&registry);
        assert_eq!(
            report.violations(),
            &[Violation::MissingMethodDesc { method: "eth_mystery".to_owned() }]
        );
    }

    #[test]
    fn placeholder_descriptions_count_as_missing() {
        let registry = module_of(vec![MethodDescriptor::new("mystery", "?")
            .returns(ReturnShape::new(TypeTag::Bool, "whether the call was successful"))]);
        assert!(!check(&registry).is_clean());
    }

    #[test]
    fn nodoc_methods_may_keep_placeholders() {
        let registry = module_of(vec![MethodDescriptor::new("mystery", "?")
            .returns(ReturnShape::new(TypeTag::Bool, "whether the call was successful"))
            .nodoc("Not implemented by the client")]);
        assert!(check(&registry).is_clean());
    }

    #[test]
    fn flags_required_after_optional() {
        let registry = module_of(vec![MethodDescriptor::new("badOrder", "desc")
            .with_param(Param::new(TypeTag::Quantity, "first").optional())
            .with_param(Param::new(TypeTag::Address, "second"))
            .returns(ReturnShape::new(TypeTag::Bool, "flag"))]);
        let report = check(&registry);
        assert_eq!(
            report.violations(),
            &[Violation::RequiredAfterOptional { method: "eth_badOrder".to_owned(), index: 1 }]
        );
    }

    #[test]
    fn trailing_optionals_are_fine() {
        let registry = module_of(vec![MethodDescriptor::new("goodOrder", "desc")
            .with_param(Param::new(TypeTag::Address, "first"))
            .with_param(Param::new(TypeTag::BlockNumber, "second").optional())
            .with_param(Param::new(TypeTag::Quantity, "third").optional())
            .returns(ReturnShape::new(TypeTag::Bool, "flag"))]);
        assert!(check(&registry).is_clean());
    }

    #[test]
    fn flags_dangling_cross_reference() {
        let registry = module_of(vec![MethodDescriptor::new("orphan", "desc")
            .returns("See [eth_missing](#eth_missing)")]);
        let report = check(&registry);
        assert_eq!(
            report.violations(),
            &[Violation::DanglingReference {
                method: "eth_orphan".to_owned(),
                anchor: "eth_missing".to_owned()
            }]
        );
    }

    #[test]
    fn resolves_cross_reference_by_anchor_not_label() {
        // The label may disagree with the anchor; only the anchor counts.
        let registry = module_of(vec![
            MethodDescriptor::new("target", "desc")
                .returns(ReturnShape::new(TypeTag::Bool, "flag")),
            MethodDescriptor::new("pointer", "desc")
                .returns("See [eth_somethingElse](#eth_target)"),
        ]);
        assert!(check(&registry).is_clean());
    }

    #[test]
    fn flags_reference_without_anchor() {
        let registry =
            module_of(vec![MethodDescriptor::new("vague", "desc").returns("See elsewhere")]);
        let report = check(&registry);
        assert_eq!(
            report.violations(),
            &[Violation::MissingReturnsDesc { method: "eth_vague".to_owned() }]
        );
    }

    #[test]
    fn flags_empty_field_descriptions_recursively() {
        let registry = module_of(vec![MethodDescriptor::new("shaped", "desc").returns(
            ReturnShape::new(TypeTag::Object, "outer").with_fields(vec![
                ethdoc_types::Field::new("tx", TypeTag::Object, "Transaction object:")
                    .with_fields(vec![ethdoc_types::Field::new("hash", TypeTag::Hash, "")]),
            ]),
        )]);
        let report = check(&registry);
        assert_eq!(
            report.violations(),
            &[Violation::MissingFieldDesc {
                method: "eth_shaped".to_owned(),
                field: "hash".to_owned()
            }]
        );
    }

    #[test]
    fn report_lists_one_violation_per_line() {
        let registry = module_of(vec![
            MethodDescriptor::new("first", "")
                .returns(ReturnShape::new(TypeTag::Bool, "flag")),
            MethodDescriptor::new("second", "desc").returns("See [gone](#eth_gone)"),
        ]);
        let report = check(&registry);
        let rendered = report.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("eth_first: missing description"));
        assert!(rendered.contains("eth_second: cross-reference `#eth_gone` does not resolve"));
    }

    #[test]
    fn anchor_extraction_handles_prose_around_links() {
        assert_eq!(
            anchor_targets("See [eth_getBlockByHash](#eth_getblockbyhash) for the shape"),
            ["eth_getblockbyhash"]
        );
        assert_eq!(anchor_targets("no links here"), Vec::<String>::new());
        assert_eq!(
            anchor_targets("[a](#eth_a) and [b](#eth_b)"),
            ["eth_a", "eth_b"]
        );
    }
}

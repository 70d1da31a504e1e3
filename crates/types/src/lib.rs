//! Descriptor types for the JSON-RPC documentation catalogue.
//!
//! The catalogue is static metadata: each RPC method is described by a
//! [`MethodDescriptor`] whose parameters and return value reference the
//! fixed [`TypeTag`] vocabulary. Nothing here parses or dispatches
//! requests; the structures exist so a documentation build can walk them.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod descriptor;
mod example;
mod tag;

pub use descriptor::{Field, MethodDescriptor, Param, ReturnShape, Returns};
pub use example::{from_decimal, Example};
pub use tag::TypeTag;

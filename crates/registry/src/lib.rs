//! Declarative catalogue of the client's JSON-RPC surface.
//!
//! One module per API namespace builds its method table from the shared
//! descriptor types; [`Registry`] combines the tables and enforces the
//! name-uniqueness invariant. All data is defined once at load time and
//! read-only thereafter — nothing here serves requests.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod eth;
pub mod personal;
pub mod private;
pub mod secretstore;

mod namespace;
mod registry;

pub use namespace::ApiNamespace;
pub use registry::{ApiModule, Registry, RegistryError};

//! Dependency resolution engine: expands a dependency map into a fully
//! nested tree, detecting cycles and undeclared packages, plus read-only
//! graph queries (why-paths, dependents, install order).

pub mod cache;
pub mod graph;
pub mod resolved;
pub mod resolver;

pub use resolved::ResolvedGraph;
pub use resolver::{resolve_dependencies, resolve_packages, ResolveError};

//! Core data types for the depgraph tool.
//!
//! This crate defines the input side of dependency resolution: the
//! [`DependencyMap`](dependency_map::DependencyMap) handed to the resolver,
//! the pluggable sources it is loaded from, and the global configuration.
//!
//! This crate performs file I/O only inside the input sources and config
//! loader; the map type itself is plain data.

pub mod config;
pub mod dependency_map;
pub mod source;

//! Shared utilities for the depgraph tool.
//!
//! Cross-cutting concerns used by the other depgraph crates: the unified
//! error type and Cargo-style terminal status lines.

pub mod errors;
pub mod progress;

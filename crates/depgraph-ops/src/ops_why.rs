//! Operation: explain why a package is part of the graph.

use std::path::Path;

use depgraph_resolver::graph::DependencyGraph;
use depgraph_util::errors::{DepgraphError, DepgraphResult};

use crate::load_input;

/// Print every chain from a root package down to `package`.
pub fn why(package: &str, input: Option<&Path>) -> DepgraphResult<()> {
    let loaded = load_input(input)?;
    let graph = DependencyGraph::from_map(&loaded.map);

    if graph.find(package).is_none() {
        return Err(DepgraphError::Generic {
            message: format!("Package '{package}' not found in {}", loaded.origin),
        }
        .into());
    }

    if graph.dependents_of(package).is_empty() {
        println!("'{package}' is a root package; nothing depends on it.");
        return Ok(());
    }

    let chains = graph.why(package);
    if chains.is_empty() {
        println!("No root package depends on '{package}'.");
        return Ok(());
    }

    println!("Paths to {package}:");
    for chain in &chains {
        println!("  {}", chain.join(" -> "));
    }
    Ok(())
}

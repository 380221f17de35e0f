//! Operation: show what depends on a package (inverted tree).

use std::path::Path;

use depgraph_resolver::graph::DependencyGraph;
use depgraph_util::errors::{DepgraphError, DepgraphResult};

use crate::load_input;

pub fn dependents(package: &str, input: Option<&Path>) -> DepgraphResult<()> {
    let loaded = load_input(input)?;
    let graph = DependencyGraph::from_map(&loaded.map);

    let inverted = graph.print_inverted_tree(package);
    if inverted.is_empty() {
        return Err(DepgraphError::Generic {
            message: format!("Package '{package}' not found in {}", loaded.origin),
        }
        .into());
    }

    if graph.dependents_of(package).is_empty() {
        println!("Nothing depends on '{package}'.");
    } else {
        print!("{inverted}");
    }
    Ok(())
}

//! Operation: print packages in install order (dependencies first).

use std::path::Path;

use depgraph_resolver::graph::DependencyGraph;
use depgraph_resolver::resolve_dependencies;
use depgraph_util::errors::DepgraphResult;

use crate::load_input;

pub fn order(input: Option<&Path>) -> DepgraphResult<()> {
    let loaded = load_input(input)?;
    // Validate with the resolver first so failures match `resolve` exactly.
    resolve_dependencies(&loaded.map)?;

    let graph = DependencyGraph::from_map(&loaded.map);
    for name in graph.install_order()? {
        println!("{name}");
    }
    Ok(())
}

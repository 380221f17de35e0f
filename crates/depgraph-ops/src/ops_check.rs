//! Operation: validate a dependency map without printing the tree.

use std::path::Path;

use depgraph_resolver::resolve_dependencies;
use depgraph_util::errors::DepgraphResult;

use crate::load_input;

/// Resolve and discard, reporting only success or the first failure.
pub fn check(input: Option<&Path>) -> DepgraphResult<()> {
    let loaded = load_input(input)?;
    let resolved = resolve_dependencies(&loaded.map)?;
    tracing::debug!(
        "{} packages, {} edges, longest chain {}",
        loaded.map.len(),
        loaded.map.edge_count(),
        resolved.depth()
    );

    depgraph_util::progress::status(
        "Checked",
        &format!("{} packages, no cycles or missing dependencies", loaded.map.len()),
    );
    Ok(())
}

//! Handler for `depgraph dependents`.

use std::path::Path;

use depgraph_util::errors::DepgraphResult;

pub fn exec(package: &str, file: Option<&Path>) -> DepgraphResult<()> {
    depgraph_ops::ops_dependents::dependents(package, file)
}

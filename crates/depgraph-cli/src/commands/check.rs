//! Handler for `depgraph check`.

use std::path::Path;

use depgraph_util::errors::DepgraphResult;

pub fn exec(file: Option<&Path>) -> DepgraphResult<()> {
    depgraph_ops::ops_check::check(file)
}

//! Handler for `depgraph order`.

use std::path::Path;

use depgraph_util::errors::DepgraphResult;

pub fn exec(file: Option<&Path>) -> DepgraphResult<()> {
    depgraph_ops::ops_order::order(file)
}

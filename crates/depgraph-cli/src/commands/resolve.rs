//! Handler for `depgraph resolve`.

use std::path::PathBuf;

use depgraph_core::config::OutputFormat;
use depgraph_ops::ops_resolve::{self, ResolveOptions};
use depgraph_util::errors::DepgraphResult;

pub fn exec(
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    depth: Option<u32>,
) -> DepgraphResult<()> {
    let opts = ResolveOptions {
        input: file,
        format,
        depth: depth.map(|d| d as usize),
    };
    ops_resolve::resolve(&opts)
}

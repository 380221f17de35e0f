//! Operation: resolve the dependency map and print the nested tree.

use std::path::PathBuf;

use depgraph_core::config::OutputFormat;
use depgraph_resolver::resolve_dependencies;
use depgraph_util::errors::{DepgraphError, DepgraphResult};

use crate::load_input;

/// Options for `depgraph resolve`.
#[derive(Default)]
pub struct ResolveOptions {
    /// Dependency map to read; falls back to env, config, then the platform default.
    pub input: Option<PathBuf>,
    /// Overrides `[output] format` from the global config.
    pub format: Option<OutputFormat>,
    /// Overrides `[output] max-depth` for tree output.
    pub depth: Option<usize>,
}

/// Resolve every package and print the result.
pub fn resolve(opts: &ResolveOptions) -> DepgraphResult<()> {
    let loaded = load_input(opts.input.as_deref())?;
    let resolved = resolve_dependencies(&loaded.map)?;

    depgraph_util::progress::status(
        "Resolved",
        &format!("{} packages from {}", resolved.len(), loaded.origin),
    );

    let format = opts.format.unwrap_or(loaded.config.output.format);
    match format {
        OutputFormat::Json => {
            let json = resolved.to_json_pretty().map_err(|e| DepgraphError::Generic {
                message: format!("Failed to serialize resolved graph: {e}"),
            })?;
            println!("{json}");
        }
        OutputFormat::Tree => {
            let depth = opts.depth.or(loaded.config.output.max_depth);
            print!("{}", resolved.render_tree(depth));
        }
    }

    Ok(())
}

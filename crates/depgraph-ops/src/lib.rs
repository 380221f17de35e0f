pub mod ops_check;
pub mod ops_dependents;
pub mod ops_order;
pub mod ops_resolve;
pub mod ops_why;

use std::path::Path;

use depgraph_core::config::GlobalConfig;
use depgraph_core::dependency_map::DependencyMap;
use depgraph_core::source;
use depgraph_util::errors::DepgraphResult;

/// A dependency map together with the configuration it was loaded under.
pub struct LoadedInput {
    pub map: DependencyMap,
    pub config: GlobalConfig,
    /// Where the map came from, for status output.
    pub origin: String,
}

/// Load the global config and the dependency map it (or `explicit`) points at.
pub fn load_input(explicit: Option<&Path>) -> DepgraphResult<LoadedInput> {
    let config = match GlobalConfig::load() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to load global config, using defaults: {e}");
            GlobalConfig::default()
        }
    };

    let path = source::resolve_input_path(explicit, &config);
    tracing::debug!("Reading dependency map from {}", path.display());

    let source = source::source_for_path(&path);
    let map = source.load()?;
    Ok(LoadedInput {
        map,
        config,
        origin: source.describe(),
    })
}

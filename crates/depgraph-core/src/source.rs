//! Pluggable acquisition of a [`DependencyMap`].
//!
//! The resolver never touches the filesystem; callers pick a [`GraphSource`]
//! and hand the loaded map over.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use depgraph_util::errors::{DepgraphError, DepgraphResult};

use crate::config::GlobalConfig;
use crate::dependency_map::DependencyMap;

/// Environment variable overriding the configured input path.
pub const INPUT_ENV_VAR: &str = "DEPGRAPH_INPUT";

/// Something that can produce a dependency map.
pub trait GraphSource {
    fn load(&self) -> DepgraphResult<DependencyMap>;

    /// Human-readable origin, used in status output.
    fn describe(&self) -> String;
}

/// A JSON file holding an object of `name -> [dependency, ...]`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphSource for JsonFileSource {
    fn load(&self) -> DepgraphResult<DependencyMap> {
        let content = read_input(&self.path)?;
        let map = DependencyMap::from_json_str(&content).map_err(|e| DepgraphError::Input {
            message: format!("Failed to parse {}: {e}", self.path.display()),
        })?;
        tracing::debug!(
            "Loaded {} packages from {}",
            map.len(),
            self.path.display()
        );
        Ok(map)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A TOML file holding a table of `name = [dependency, ...]`.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphSource for TomlFileSource {
    fn load(&self) -> DepgraphResult<DependencyMap> {
        let content = read_input(&self.path)?;
        let map = DependencyMap::from_toml_str(&content).map_err(|e| DepgraphError::Input {
            message: format!("Failed to parse {}: {e}", self.path.display()),
        })?;
        tracing::debug!(
            "Loaded {} packages from {}",
            map.len(),
            self.path.display()
        );
        Ok(map)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An already-built map, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub DependencyMap);

impl GraphSource for StaticSource {
    fn load(&self) -> DepgraphResult<DependencyMap> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "<in-memory>".to_string()
    }
}

fn read_input(path: &Path) -> DepgraphResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        DepgraphError::Input {
            message: format!("Failed to read {}: {e}", path.display()),
        }
        .into()
    })
}

/// Pick a source by file extension: `.toml` is TOML, anything else JSON.
pub fn source_for_path(path: &Path) -> Box<dyn GraphSource> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        Box::new(TomlFileSource::new(path))
    } else {
        Box::new(JsonFileSource::new(path))
    }
}

/// The platform default input location.
pub fn default_input_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\tmp\deps.json")
    } else {
        PathBuf::from("/tmp/deps.json")
    }
}

/// Decide which file to load.
///
/// Precedence: explicit path, then `DEPGRAPH_INPUT`, then `[input] path`
/// from the global config, then [`default_input_path`].
pub fn resolve_input_path(explicit: Option<&Path>, config: &GlobalConfig) -> PathBuf {
    pick_input_path(explicit, std::env::var_os(INPUT_ENV_VAR), config)
}

fn pick_input_path(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    config: &GlobalConfig,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return PathBuf::from(value);
    }
    config
        .input
        .path
        .clone()
        .unwrap_or_else(default_input_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_path(path: &str) -> GlobalConfig {
        let mut config = GlobalConfig::default();
        config.input.path = Some(PathBuf::from(path));
        config
    }

    #[test]
    fn explicit_path_wins() {
        let config = config_with_path("/from/config.json");
        let picked = pick_input_path(
            Some(Path::new("cli.json")),
            Some(OsString::from("/from/env.json")),
            &config,
        );
        assert_eq!(picked, PathBuf::from("cli.json"));
    }

    #[test]
    fn env_beats_config() {
        let config = config_with_path("/from/config.json");
        let picked = pick_input_path(None, Some(OsString::from("/from/env.json")), &config);
        assert_eq!(picked, PathBuf::from("/from/env.json"));
    }

    #[test]
    fn empty_env_is_ignored() {
        let config = config_with_path("/from/config.json");
        let picked = pick_input_path(None, Some(OsString::new()), &config);
        assert_eq!(picked, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn falls_back_to_platform_default() {
        let picked = pick_input_path(None, None, &GlobalConfig::default());
        assert_eq!(picked, default_input_path());
    }
}

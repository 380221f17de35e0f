//! The package → direct-dependencies mapping consumed by the resolver.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Mapping from package name to its ordered list of direct dependency names.
///
/// Keys iterate in sorted order, so every traversal over a map is
/// deterministic. Dependency lists keep the order they were declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyMap {
    packages: BTreeMap<String, Vec<String>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `name -> [dependency, ...]`.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse a TOML table of `name = [dependency, ...]`.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Declare `name` with the given direct dependencies, returning the
    /// previous list if the package was already declared.
    pub fn insert<N, D, S>(&mut self, name: N, dependencies: D) -> Option<Vec<String>>
    where
        N: Into<String>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.packages.insert(
            name.into(),
            dependencies.into_iter().map(Into::into).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Whether `name` is declared as a key.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Direct dependencies of `name`, or `None` if it is not declared.
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.packages.get(name).map(Vec::as_slice)
    }

    /// Declared package names in key order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.packages
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    /// Every name that appears in some dependency list.
    pub fn referenced_names(&self) -> BTreeSet<&str> {
        self.packages
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Names referenced as dependencies but never declared, sorted.
    pub fn undeclared(&self) -> Vec<&str> {
        self.referenced_names()
            .into_iter()
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Total number of dependency edges across all packages.
    pub fn edge_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }
}

impl<N, D, S> FromIterator<(N, D)> for DependencyMap
where
    N: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, D)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, deps) in iter {
            map.insert(name, deps);
        }
        map
    }
}

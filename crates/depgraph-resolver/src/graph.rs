//! Read-only graph view over a dependency map.
//!
//! The nested [`ResolvedGraph`](crate::ResolvedGraph) answers "what does X
//! pull in"; this view answers the reverse questions: who depends on X, why
//! is X present, and in which order can packages be installed.

use std::collections::{HashMap, HashSet};

use depgraph_core::dependency_map::DependencyMap;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::resolver::ResolveError;

/// A package node. Undeclared names still get a node so queries work on
/// incomplete maps.
#[derive(Debug, Clone)]
pub struct PackageNode {
    pub name: String,
    pub declared: bool,
}

/// Dependency graph backed by petgraph. Edges point from a package to its
/// dependency; the edge weight is the dependency's position in the
/// declaring package's list.
pub struct DependencyGraph {
    graph: DiGraph<PackageNode, usize>,
    index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_map(map: &DependencyMap) -> Self {
        let mut graph = Self::new();
        for name in map.packages() {
            let idx = graph.add_node(name);
            graph.graph[idx].declared = true;
        }
        for (name, deps) in map.iter() {
            let from = graph.add_node(name);
            for (position, dep) in deps.iter().enumerate() {
                let to = graph.add_node(dep);
                graph.add_edge(from, to, position);
            }
        }
        graph
    }

    /// Add or retrieve a node. If the name already exists, returns the existing index.
    fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(PackageNode {
            name: name.to_string(),
            declared: false,
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, position: usize) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, position);
        }
    }

    pub fn find(&self, name: &str) -> Option<&PackageNode> {
        self.index.get(name).map(|&idx| &self.graph[idx])
    }

    fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    /// Direct dependencies of `name` in declaration order.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        self.ordered_dependencies(idx)
            .into_iter()
            .map(|dep| self.name(dep))
            .collect()
    }

    fn ordered_dependencies(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .collect();
        edges.sort_unstable();
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Packages that list `name` as a direct dependency, sorted.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        let mut dependents: Vec<&str> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| self.name(e.source()))
            .collect();
        dependents.sort_unstable();
        dependents
    }

    /// Declared packages nothing else depends on, sorted.
    pub fn roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self
            .graph
            .node_indices()
            .filter(|&idx| self.graph[idx].declared)
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| self.name(idx))
            .collect();
        roots.sort_unstable();
        roots
    }

    /// A dependency chain from `from` down to `to`, both included.
    ///
    /// Dependencies are explored in declaration order, so the first chain
    /// found is deterministic.
    pub fn find_path(&self, from: &str, to: &str) -> Option<Vec<&str>> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        let mut path = Vec::new();
        let mut seen = HashSet::new();
        if self.dfs_path(from, to, &mut path, &mut seen) {
            Some(path.into_iter().map(|idx| self.name(idx)).collect())
        } else {
            None
        }
    }

    fn dfs_path(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        path: &mut Vec<NodeIndex>,
        seen: &mut HashSet<NodeIndex>,
    ) -> bool {
        path.push(current);
        if current == target {
            return true;
        }
        // A node that failed once cannot reach the target from any other path.
        if !seen.insert(current) {
            path.pop();
            return false;
        }
        for dep in self.ordered_dependencies(current) {
            if self.dfs_path(dep, target, path, seen) {
                return true;
            }
        }
        path.pop();
        false
    }

    /// For every root that pulls in `target`, the chain from that root to it.
    ///
    /// A root target is not pulled in by anything, so it gets no chains.
    pub fn why(&self, target: &str) -> Vec<Vec<&str>> {
        self.roots()
            .into_iter()
            .filter(|&root| root != target)
            .filter_map(|root| self.find_path(root, target))
            .collect()
    }

    /// Packages ordered so that every package comes after all of its
    /// dependencies.
    ///
    /// Fails with [`ResolveError::Cyclic`] if the graph has a cycle, or with
    /// [`ResolveError::Missing`] for the first undeclared name.
    pub fn install_order(&self) -> Result<Vec<&str>, ResolveError> {
        let sorted = toposort(&self.graph, None).map_err(|cycle| {
            let idx = cycle.node_id();
            ResolveError::Cyclic {
                name: self.name(idx).to_string(),
                chain: self.cycle_through(idx),
            }
        })?;

        if let Some(missing) = sorted
            .iter()
            .copied()
            .filter(|&idx| !self.graph[idx].declared)
            .min_by(|&a, &b| self.name(a).cmp(self.name(b)))
        {
            let name = self.name(missing);
            return Err(ResolveError::Missing {
                name: name.to_string(),
                required_by: self.dependents_of(name).first().map(|p| p.to_string()),
            });
        }

        Ok(sorted.into_iter().rev().map(|idx| self.name(idx)).collect())
    }

    /// A closed chain `idx -> ... -> idx`, if `idx` lies on a cycle.
    fn cycle_through(&self, idx: NodeIndex) -> Vec<String> {
        let start = self.name(idx);
        for dep in self.ordered_dependencies(idx) {
            if let Some(path) = self.find_path(self.name(dep), start) {
                let mut chain = vec![start.to_string()];
                chain.extend(path.into_iter().map(str::to_string));
                return chain;
            }
        }
        Vec::new()
    }

    /// Print the tree of packages that depend on `target`, directly or not.
    ///
    /// Returns an empty string if `target` is unknown.
    pub fn print_inverted_tree(&self, target: &str) -> String {
        let mut output = String::new();
        let Some(&idx) = self.index.get(target) else {
            return output;
        };

        output.push_str(&format!("{target}\n"));

        let mut visited = HashSet::new();
        visited.insert(idx);

        let dependents = self.dependents_of(target);
        let count = dependents.len();
        for (i, dependent) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(&mut output, dependent, "", is_last, &mut visited);
        }

        output
    }

    fn print_inverted_subtree(
        &self,
        output: &mut String,
        name: &str,
        prefix: &str,
        is_last: bool,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{prefix}{connector}{name}\n"));

        let Some(&idx) = self.index.get(name) else {
            return;
        };
        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let dependents = self.dependents_of(name);
        let count = dependents.len();
        for (i, dependent) in dependents.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_inverted_subtree(output, dependent, &child_prefix, is_last, visited);
        }

        visited.remove(&idx);
    }

    /// Number of nodes, undeclared names included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(json: &str) -> DependencyGraph {
        DependencyGraph::from_map(&DependencyMap::from_json_str(json).unwrap())
    }

    #[test]
    fn dependencies_keep_declaration_order() {
        let g = graph(r#"{"app": ["zlib", "attrs", "six"], "zlib": [], "attrs": [], "six": []}"#);
        assert_eq!(g.dependencies_of("app"), vec!["zlib", "attrs", "six"]);
        assert!(g.dependencies_of("unknown").is_empty());
    }

    #[test]
    fn dependents_are_sorted() {
        let g = graph(r#"{"b": ["d"], "a": ["d"], "c": ["d"], "d": []}"#);
        assert_eq!(g.dependents_of("d"), vec!["a", "b", "c"]);
    }

    #[test]
    fn undeclared_names_get_nodes() {
        let g = graph(r#"{"a": ["ghost"]}"#);
        assert_eq!(g.len(), 2);
        assert!(!g.find("ghost").unwrap().declared);
        assert!(g.find("a").unwrap().declared);
    }

    #[test]
    fn roots_exclude_depended_on_packages() {
        let g = graph(r#"{"app": ["lib"], "tool": ["lib"], "lib": []}"#);
        assert_eq!(g.roots(), vec!["app", "tool"]);
    }

    #[test]
    fn find_path_follows_declaration_order() {
        let g = graph(r#"{"a": ["b", "c"], "b": ["d"], "c": ["d"], "d": []}"#);
        assert_eq!(g.find_path("a", "d").unwrap(), vec!["a", "b", "d"]);
        assert!(g.find_path("d", "a").is_none());
        assert!(g.find_path("a", "missing").is_none());
    }

    #[test]
    fn why_lists_every_root_chain() {
        let g = graph(r#"{"app": ["http"], "cli": ["http"], "http": ["socket"], "socket": []}"#);
        let chains = g.why("socket");
        assert_eq!(
            chains,
            vec![
                vec!["app", "http", "socket"],
                vec!["cli", "http", "socket"]
            ]
        );
    }

    #[test]
    fn why_of_a_root_is_empty() {
        let g = graph(r#"{"app": ["http"], "http": []}"#);
        assert!(g.why("app").is_empty());
        assert_eq!(g.why("http"), vec![vec!["app", "http"]]);
    }

    #[test]
    fn install_order_puts_dependencies_first() {
        let g = graph(r#"{"a": ["b", "c"], "b": ["d"], "c": ["d"], "d": []}"#);
        let order = g.install_order().unwrap();
        let pos = |name: &str| order.iter().position(|n| *n == name).unwrap();
        assert_eq!(order.len(), 4);
        assert!(pos("d") < pos("b"));
        assert!(pos("d") < pos("c"));
        assert!(pos("b") < pos("a"));
        assert!(pos("c") < pos("a"));
    }

    #[test]
    fn install_order_reports_cycle_chain() {
        let g = graph(r#"{"a": ["b"], "b": ["a"]}"#);
        match g.install_order().unwrap_err() {
            ResolveError::Cyclic { name, chain } => {
                assert_eq!(chain.first(), Some(&name));
                assert_eq!(chain.last(), Some(&name));
                assert_eq!(chain.len(), 3);
            }
            other => panic!("expected cycle, got {other}"),
        }
    }

    #[test]
    fn install_order_reports_missing() {
        let g = graph(r#"{"a": ["b"]}"#);
        assert_eq!(
            g.install_order().unwrap_err(),
            ResolveError::Missing {
                name: "b".to_string(),
                required_by: Some("a".to_string()),
            }
        );
    }

    #[test]
    fn inverted_tree_walks_up_to_roots() {
        let g = graph(r#"{"app": ["http"], "http": ["socket"], "socket": []}"#);
        let inv = g.print_inverted_tree("socket");
        assert_eq!(inv, "socket\n└── http\n    └── app\n");
        assert!(g.print_inverted_tree("nope").is_empty());
    }

    #[test]
    fn inverted_tree_terminates_on_cycles() {
        let g = graph(r#"{"a": ["b"], "b": ["a"]}"#);
        let inv = g.print_inverted_tree("a");
        assert!(inv.starts_with("a\n└── b\n"));
    }
}

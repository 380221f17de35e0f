//! The nested tree produced by resolution.

use std::collections::{btree_map, BTreeMap};
use std::iter::Peekable;

use serde::{Deserialize, Serialize};

/// A package name mapped to its own fully expanded dependency tree.
///
/// Serializes as nested objects: `{"a": {"b": {}}, "b": {}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedGraph {
    nodes: BTreeMap<String, ResolvedGraph>,
}

impl ResolvedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `subtree` under `name`, replacing any earlier entry.
    pub fn insert(&mut self, name: impl Into<String>, subtree: ResolvedGraph) {
        self.nodes.insert(name.into(), subtree);
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedGraph> {
        self.nodes.get(name)
    }

    /// Package names at this level, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedGraph)> {
        self.nodes.iter().map(|(name, sub)| (name.as_str(), sub))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Length of the longest chain below this level. A level of leaves has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&ResolvedGraph, usize)> = vec![(self, 0)];
        while let Some((graph, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(graph.nodes.values().map(|sub| (sub, level + 1)));
        }
        deepest
    }

    /// Number of entries at every level, counting repeated packages each time.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&ResolvedGraph> = vec![self];
        while let Some(graph) = pending.pop() {
            count += graph.nodes.len();
            pending.extend(graph.nodes.values());
        }
        count
    }

    /// Whether `name` appears as a key at any level.
    pub fn contains_anywhere(&self, name: &str) -> bool {
        let mut pending: Vec<&ResolvedGraph> = vec![self];
        while let Some(graph) = pending.pop() {
            if graph.nodes.contains_key(name) {
                return true;
            }
            pending.extend(graph.nodes.values());
        }
        false
    }

    /// Pretty-printed JSON in the same layout as `serde_json::to_string_pretty`.
    ///
    /// Written level by level from an explicit stack so trees as deep as the
    /// resolver can build do not exhaust the thread stack.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        if self.nodes.is_empty() {
            return Ok("{}".to_string());
        }

        let mut output = String::from("{");
        let mut stack: Vec<(btree_map::Iter<'_, String, ResolvedGraph>, bool)> =
            vec![(self.nodes.iter(), true)];
        while let Some((entries, first)) = stack.last_mut() {
            let Some((name, sub)) = entries.next() else {
                stack.pop();
                output.push('\n');
                push_indent(&mut output, stack.len());
                output.push('}');
                continue;
            };
            if !std::mem::replace(first, false) {
                output.push(',');
            }
            output.push('\n');
            push_indent(&mut output, stack.len());
            output.push_str(&serde_json::to_string(name)?);
            output.push_str(": ");
            if sub.nodes.is_empty() {
                output.push_str("{}");
            } else {
                output.push('{');
                stack.push((sub.nodes.iter(), true));
            }
        }
        Ok(output)
    }

    /// Render as a box-drawing tree, one top-level package per root line.
    ///
    /// `max_depth` limits how many levels below each top-level package are shown.
    pub fn render_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        for (name, sub) in &self.nodes {
            output.push_str(&format!("{name}\n"));
            if max_depth != Some(0) {
                sub.render_children(&mut output, max_depth);
            }
        }
        output
    }

    fn render_children(&self, output: &mut String, max_depth: Option<usize>) {
        let mut stack: Vec<(Peekable<btree_map::Iter<'_, String, ResolvedGraph>>, String)> =
            vec![(self.nodes.iter().peekable(), String::new())];
        while let Some((entries, prefix)) = stack.last_mut() {
            let Some((name, sub)) = entries.next() else {
                stack.pop();
                continue;
            };
            let is_last = entries.peek().is_none();
            let connector = if is_last { "└── " } else { "├── " };
            output.push_str(&format!("{prefix}{connector}{name}\n"));

            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            let depth = stack.len();
            if !sub.nodes.is_empty() && max_depth.map_or(true, |max| depth < max) {
                stack.push((sub.nodes.iter().peekable(), child_prefix));
            }
        }
    }
}

fn push_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

// Deep chains would otherwise be dropped recursively, one frame per level.
impl Drop for ResolvedGraph {
    fn drop(&mut self) {
        let mut pending: Vec<ResolvedGraph> =
            std::mem::take(&mut self.nodes).into_values().collect();
        while let Some(mut graph) = pending.pop() {
            pending.extend(std::mem::take(&mut graph.nodes).into_values());
        }
    }
}

//! Resolution session state.
//!
//! Resolved subtrees are deliberately not memoized; the only state carried
//! through a resolution call is the set of packages on the active path.

use std::collections::HashSet;

/// Packages currently being expanded on the active depth-first path.
///
/// Membership detects cycles; the ordered path lets a cycle be reported as
/// the chain that produced it.
#[derive(Debug, Default)]
pub struct VisitedSet {
    on_stack: HashSet<String>,
    path: Vec<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as being expanded. Callers check `contains` first; a name
    /// already on the path is left where it is.
    pub fn push(&mut self, name: &str) {
        if self.on_stack.insert(name.to_string()) {
            self.path.push(name.to_string());
        }
    }

    /// Finish expanding the most recently pushed package.
    pub fn pop(&mut self) -> Option<String> {
        let name = self.path.pop()?;
        self.on_stack.remove(&name);
        Some(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.on_stack.contains(name)
    }

    /// The chain that re-enters `name`: from its position on the path to
    /// the top, closed with `name` again. Empty if `name` is not on the path.
    pub fn cycle_through(&self, name: &str) -> Vec<String> {
        let Some(start) = self.path.iter().position(|p| p == name) else {
            return Vec::new();
        };
        let mut chain = self.path[start..].to_vec();
        chain.push(name.to_string());
        chain
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

//! Depth-first expansion of a dependency map into a [`ResolvedGraph`].
//!
//! Every declared package is expanded into its full transitive tree. A
//! package is re-expanded each time it is reached; only the packages on the
//! active path are tracked, so a diamond is fine while a back-edge to the
//! current path is a cycle.
//!
//! The expansion runs on an explicit frame stack rather than native
//! recursion, so chain length is bounded by heap, not thread stack.

use depgraph_core::dependency_map::DependencyMap;
use miette::Diagnostic;
use thiserror::Error;

use crate::cache::VisitedSet;
use crate::resolved::ResolvedGraph;

/// Why a dependency map could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    /// `name` was reached again while it was still being expanded.
    #[error("Cyclic dependency detected: {name} ({})", .chain.join(" -> "))]
    #[diagnostic(
        code(depgraph::cyclic),
        help("Remove one of the edges in the chain to break the cycle")
    )]
    Cyclic { name: String, chain: Vec<String> },

    /// `name` is referenced as a dependency but has no entry of its own.
    #[error("Missing dependency: {name}{}", required_by_suffix(.required_by))]
    #[diagnostic(
        code(depgraph::missing),
        help("Declare every referenced package, using an empty list if it has no dependencies")
    )]
    Missing {
        name: String,
        required_by: Option<String>,
    },
}

impl ResolveError {
    /// The package the error is about.
    pub fn package(&self) -> &str {
        match self {
            Self::Cyclic { name, .. } | Self::Missing { name, .. } => name,
        }
    }
}

fn required_by_suffix(required_by: &Option<String>) -> String {
    match required_by {
        Some(parent) => format!(" (required by {parent})"),
        None => String::new(),
    }
}

/// One package being expanded.
struct Frame<'a> {
    name: &'a str,
    dependencies: &'a [String],
    next: usize,
    children: ResolvedGraph,
}

/// Expand every package of `map` into its fully nested dependency tree.
///
/// The top-level keys of the result are exactly the keys of `map`. Fails on
/// the first package that re-enters the active path (cycle) or that is
/// referenced without being declared. A name that is both is reported as a
/// cycle.
pub fn resolve_dependencies(map: &DependencyMap) -> Result<ResolvedGraph, ResolveError> {
    let names: Vec<&str> = map.packages().collect();
    resolve_packages(map, &names)
}

/// Like [`resolve_dependencies`], but only `names` are expanded at the top
/// level. A name that is not declared in `map` is reported as missing with
/// no parent.
pub fn resolve_packages(
    map: &DependencyMap,
    names: &[&str],
) -> Result<ResolvedGraph, ResolveError> {
    let mut visited = VisitedSet::new();
    let mut resolved = ResolvedGraph::new();
    for &name in names {
        let subtree = expand(name, map, &mut visited)?;
        resolved.insert(name, subtree);
    }
    Ok(resolved)
}

fn expand(
    root: &str,
    map: &DependencyMap,
    visited: &mut VisitedSet,
) -> Result<ResolvedGraph, ResolveError> {
    let mut stack = vec![enter(root, None, map, visited)?];
    let mut finished = ResolvedGraph::new();

    while let Some(frame) = stack.last_mut() {
        let dependencies = frame.dependencies;
        if let Some(dep) = dependencies.get(frame.next) {
            frame.next += 1;
            let parent = frame.name;
            let child = enter(dep, Some(parent), map, visited)?;
            stack.push(child);
            continue;
        }

        let Some(done) = stack.pop() else { break };
        visited.pop();
        match stack.last_mut() {
            Some(parent) => parent.children.insert(done.name, done.children),
            None => finished = done.children,
        }
    }

    Ok(finished)
}

fn enter<'a>(
    name: &'a str,
    parent: Option<&str>,
    map: &'a DependencyMap,
    visited: &mut VisitedSet,
) -> Result<Frame<'a>, ResolveError> {
    if visited.contains(name) {
        return Err(ResolveError::Cyclic {
            name: name.to_string(),
            chain: visited.cycle_through(name),
        });
    }
    let Some(dependencies) = map.dependencies_of(name) else {
        return Err(ResolveError::Missing {
            name: name.to_string(),
            required_by: parent.map(str::to_string),
        });
    };
    visited.push(name);
    Ok(Frame {
        name,
        dependencies,
        next: 0,
        children: ResolvedGraph::new(),
    })
}

//! CLI argument definitions for depgraph.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use depgraph_core::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    version,
    about = "Resolve package dependency maps into fully expanded trees",
    long_about = "depgraph reads a map of package names to their direct dependencies \
                  (JSON or TOML), expands every package into its full dependency tree, \
                  and reports cycles and undeclared packages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every package and print the dependency tree
    Resolve {
        /// Dependency map (defaults to $DEPGRAPH_INPUT, config, then /tmp/deps.json)
        file: Option<PathBuf>,
        /// Output format: tree or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Maximum tree depth below each package
        #[arg(long)]
        depth: Option<u32>,
    },

    /// Validate the dependency map without printing it
    Check {
        /// Dependency map
        file: Option<PathBuf>,
    },

    /// Print packages in install order, dependencies first
    Order {
        /// Dependency map
        file: Option<PathBuf>,
    },

    /// Explain why a package is included
    Why {
        /// Package to explain
        package: String,
        /// Dependency map
        file: Option<PathBuf>,
    },

    /// Show the packages that depend on a package
    Dependents {
        /// Package to invert
        package: String,
        /// Dependency map
        file: Option<PathBuf>,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}

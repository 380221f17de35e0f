//! Command dispatch and handler modules.

mod check;
mod dependents;
mod order;
mod resolve;
mod why;

use depgraph_util::errors::DepgraphResult;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> DepgraphResult<()> {
    match cli.command {
        Command::Resolve {
            file,
            format,
            depth,
        } => resolve::exec(file, format, depth),
        Command::Check { file } => check::exec(file.as_deref()),
        Command::Order { file } => order::exec(file.as_deref()),
        Command::Why { package, file } => why::exec(&package, file.as_deref()),
        Command::Dependents { package, file } => dependents::exec(&package, file.as_deref()),
    }
}

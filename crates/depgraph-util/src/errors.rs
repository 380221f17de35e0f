use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for depgraph operations outside the resolver core.
#[derive(Debug, Error, Diagnostic)]
pub enum DepgraphError {
    /// The dependency map could not be read or parsed.
    #[error("Input error: {message}")]
    #[diagnostic(
        code(depgraph::input),
        help("The input must map each package name to a list of dependency names")
    )]
    Input { message: String },

    /// Global configuration could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.depgraph/config.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepgraphResult<T> = miette::Result<T>;

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end a run early. All variants are terminal.
#[derive(Error, Debug)]
pub enum FlipError {
    /// Unknown flag or wrong number of positional arguments.
    #[error("{0}")]
    Usage(String),

    /// Positional argument is not a plain base-10 unsigned integer.
    #[error("intval must be an integer in [1, 20000], got '{0}'")]
    InvalidNumber(String),

    /// Positional argument parsed but lies outside the accepted range.
    #[error("intval must be an integer in [1, 20000], got {0}")]
    OutOfRange(String),

    #[error("cannot open output file '{}': {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing output: {0}")]
    WriteOutput(#[from] std::io::Error),
}

//! Error types emitted by the Waypath CLI.

use camino::Utf8PathBuf;
use thiserror::Error;
use waypath_core::{CostModelError, SolveError};

use crate::input::ParseError;

/// Errors emitted by the Waypath CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The cost model flags were rejected.
    #[error("invalid cost model: {0}")]
    CostModel(#[from] CostModelError),
    /// The input path does not exist on disk or is not a file.
    #[error("input path {path:?} does not exist or is not a file")]
    MissingInputFile {
        /// The rejected path.
        path: Utf8PathBuf,
    },
    /// Reading the input file failed.
    #[error("failed to read input at {path:?}: {source}")]
    ReadInput {
        /// The unreadable path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The input text failed validation.
    #[error("invalid input at {path:?}: {source}")]
    ParseInput {
        /// The offending file.
        path: Utf8PathBuf,
        /// The first validation failure.
        #[source]
        source: ParseError,
    },
    /// The solver rejected a test case.
    #[error("case {case} failed to solve: {source}")]
    Solve {
        /// 1-based test case number.
        case: usize,
        /// Underlying solver failure.
        #[source]
        source: SolveError,
    },
    /// Serialising a JSON report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing a report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}

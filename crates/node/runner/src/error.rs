use std::{io, path::PathBuf};

use txrank_domain::DecodeError;

/// Errors that abort a prioritization run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The input file could not be opened.
    #[error("opening transaction file {path}: {source}")]
    OpenInput {
        /// Input path.
        path: PathBuf,
        /// IO error.
        source: io::Error,
    },

    /// Reading from the input failed.
    #[error("reading transaction file at line {line}: {source}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// IO error.
        source: io::Error,
    },

    /// A line could not be decoded into a transaction.
    #[error("line {line}: {source}")]
    Decode {
        /// 1-based line number.
        line: usize,
        /// Decode failure.
        source: DecodeError,
    },

    /// The output file could not be created.
    #[error("create output file {path}: {source}")]
    CreateOutput {
        /// Output path.
        path: PathBuf,
        /// IO error.
        source: io::Error,
    },

    /// Writing to the output failed.
    #[error("writing to output file: {0}")]
    Write(#[source] io::Error),
}

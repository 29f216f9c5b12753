// Error taxonomy for the summarization pipeline.
//
// Nothing in the pipeline catches or retries these. The binary converts them
// into anyhow errors so they are reported with their context chain.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the library side of ozet.
#[derive(Error, Debug)]
pub enum OzetError {
    /// The input-mode prompt got something other than "1" or "2".
    #[error("Invalid selection: {0:?}")]
    InvalidSelection(String),

    /// Language resources could not be materialized or read.
    #[error("Language resource unavailable at {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A user-supplied input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sentence count was not an integer.
    #[error("Expected a whole number of sentences, got {0:?}")]
    Parse(String),

    /// Input that the scorer cannot meaningfully evaluate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading a prompt answer or writing a prompt failed.
    #[error("Prompt I/O failed: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, OzetError>;

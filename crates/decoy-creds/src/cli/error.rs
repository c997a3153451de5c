//! Error types for the command-line front end.

use thiserror::Error;

use crate::error::{GenerationError, OutputError, RequestError};

/// Errors surfaced by a command-line run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The request was rejected before any line was generated.
    #[error("invalid request: {source}")]
    InvalidRequest {
        /// Underlying validation error.
        #[from]
        #[source]
        source: RequestError,
    },
    /// Lines could not be generated.
    #[error("generation failed: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// The generated text could not be written.
    #[error("output failed: {source}")]
    Output {
        /// Underlying output error.
        #[from]
        #[source]
        source: OutputError,
    },
}

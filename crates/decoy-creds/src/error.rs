//! Error types for the decoy-creds crate.
//!
//! This module defines semantic error enums for randomness draws, request
//! validation, and output writing, following the project's error handling
//! conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by a [`crate::RandomSource`] draw.
///
/// With a correctly populated catalog these are unreachable; callers treat
/// them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The lower bound of an inclusive range exceeded the upper bound.
    #[error("invalid range: {low} > {high}")]
    InvalidRange {
        /// Requested lower bound.
        low: String,
        /// Requested upper bound.
        high: String,
    },

    /// A choice was requested from an empty collection.
    #[error("cannot choose from an empty collection")]
    EmptyCollection,

    /// The operating system entropy source could not be read.
    #[error("secure entropy source unavailable: {message}")]
    Entropy {
        /// Description of the entropy failure.
        message: String,
    },
}

/// Errors that reject a generation request before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The requested line count was below one.
    #[error("--count must be >= 1 (got {count})")]
    InvalidCount {
        /// Count that was supplied.
        count: i64,
    },

    /// One or more hash format names are not in the catalog.
    #[error(
        "unknown hash types: {}\nvalid: {}",
        .unknown.join(", "),
        .valid.join(", ")
    )]
    UnknownFormats {
        /// Names that were not recognised, in the order supplied.
        unknown: Vec<String>,
        /// Every valid format name, sorted.
        valid: Vec<&'static str>,
    },

    /// The hash format list was supplied but contained no names.
    #[error("no hash types supplied")]
    NoFormats,
}

/// Errors raised while generating lines for a validated request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The output buffer for the requested count could not be allocated.
    #[error("cannot hold {count} output lines: {message}")]
    Capacity {
        /// Requested line count.
        count: usize,
        /// Description of the allocation failure.
        message: String,
    },

    /// A randomness draw failed.
    #[error("random draw failed: {source}")]
    Source {
        /// Underlying randomness error.
        #[from]
        #[source]
        source: SourceError,
    },
}

/// Errors that can occur while writing generated lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The output file could not be written.
    #[error("failed to write output file at '{path}': {message}")]
    WriteError {
        /// Path that was being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The output stream rejected the write.
    #[error("failed to write output stream: {message}")]
    StreamError {
        /// Description of the I/O error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_invalid_range_formats_correctly() {
        let err = SourceError::InvalidRange {
            low: "9".to_owned(),
            high: "3".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid range: 9 > 3");
    }

    #[test]
    fn source_error_empty_collection_formats_correctly() {
        assert_eq!(
            SourceError::EmptyCollection.to_string(),
            "cannot choose from an empty collection"
        );
    }

    #[test]
    fn request_error_invalid_count_formats_correctly() {
        let err = RequestError::InvalidCount { count: -1 };
        assert_eq!(err.to_string(), "--count must be >= 1 (got -1)");
    }

    #[test]
    fn request_error_unknown_formats_lists_unknown_and_valid() {
        let err = RequestError::UnknownFormats {
            unknown: vec!["bogus".to_owned(), "crc32".to_owned()],
            valid: vec!["bcrypt", "md5"],
        };
        assert_eq!(
            err.to_string(),
            "unknown hash types: bogus, crc32\nvalid: bcrypt, md5"
        );
    }

    #[test]
    fn generation_error_capacity_formats_correctly() {
        let err = GenerationError::Capacity {
            count: 12,
            message: "capacity overflow".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "cannot hold 12 output lines: capacity overflow"
        );
    }

    #[test]
    fn output_error_formats_correctly() {
        let err = OutputError::WriteError {
            path: Utf8PathBuf::from("out/hashes.txt"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write output file at 'out/hashes.txt': permission denied"
        );
    }
}

//! Realistic-looking fake credentials for demonstration purposes.
//!
//! This crate produces strings that mimic real password hashes, tokens,
//! credential pairs, and injection payloads, for populating demo UIs. Nothing
//! is ever hashed, encrypted, or verified: every value is assembled from
//! random bytes laid out in the delimiters, alphabets, and field widths of the
//! real encoding.
//!
//! # Overview
//!
//! - [`RandomSource`] supplies draws, either seeded (reproducible) or from an
//!   OS-seeded secure generator. A [`Generator`] builds its source from the
//!   request's seed.
//! - [`catalog`] holds the renderers: [`HashFormat`] for password hashes plus
//!   passwords, usernames, credential pairs, tokens, encrypted blobs, and
//!   payloads.
//! - [`GenerationRequest`] is validated into a [`ValidatedRequest`], which a
//!   [`Generator`] turns into [`OutputLine`]s.
//! - [`cli`] wires the pipeline to the command line.
//!
//! # Example
//!
//! ```
//! use decoy_creds::{GenerationRequest, Generator, ModeFlags};
//!
//! let request = GenerationRequest {
//!     count: 5,
//!     flags: ModeFlags { token: true, ..ModeFlags::default() },
//!     seed: Some(2026),
//!     ..GenerationRequest::default()
//! };
//! let validated = request.validate().expect("valid request");
//!
//! let first = Generator::new(&validated)
//!     .and_then(Generator::generate)
//!     .expect("generated");
//! let second = Generator::new(&validated)
//!     .and_then(Generator::generate)
//!     .expect("generated");
//!
//! assert_eq!(first.len(), 5);
//! assert_eq!(first, second);
//! ```

mod atomic_io;
pub mod catalog;
pub mod cli;
mod error;
mod generator;
mod mode;
mod output;
mod request;
mod source;

pub use catalog::credentials::CredentialPair;
pub use catalog::hash::{HashFormat, parse_format_list};
pub use error::{GenerationError, OutputError, RequestError, SourceError};
pub use generator::{Generator, OutputLine, render_lines};
pub use mode::{Mode, ModeFlags};
pub use output::Destination;
pub use request::{DEFAULT_COUNT, GenerationRequest, ValidatedRequest};
pub use source::RandomSource;

//! Format catalog: renderers for every category of decoy value.
//!
//! Hash formats live in [`hash`]; passwords, usernames, and credential pairs
//! in [`credentials`]; tokens and encrypted blobs in [`tokens`]; injection
//! strings in [`payload`]. Renderers never compute a real digest. They only
//! reproduce the delimiters, alphabets, and field widths of real encodings.

pub mod credentials;
pub mod hash;
pub mod payload;
pub mod tokens;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};

use crate::source::RandomSource;

/// Lowercase hex of `nbytes` random bytes (two characters per byte).
pub(crate) fn hex_lower(source: &mut RandomSource, nbytes: usize) -> String {
    hex::encode(source.bytes(nbytes))
}

/// Uppercase hex of `nbytes` random bytes.
pub(crate) fn hex_upper(source: &mut RandomSource, nbytes: usize) -> String {
    hex::encode_upper(source.bytes(nbytes))
}

/// Standard base64 of `nbytes` random bytes with `=` padding stripped.
pub(crate) fn b64_unpadded(source: &mut RandomSource, nbytes: usize) -> String {
    STANDARD_NO_PAD.encode(source.bytes(nbytes))
}

/// Standard base64 of `nbytes` random bytes, padding kept.
pub(crate) fn b64_padded(source: &mut RandomSource, nbytes: usize) -> String {
    STANDARD.encode(source.bytes(nbytes))
}

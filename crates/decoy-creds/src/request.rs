//! Generation requests and their validation.
//!
//! A [`GenerationRequest`] is the configured, unchecked form. Calling
//! [`GenerationRequest::validate`] yields a [`ValidatedRequest`], the only
//! type the generator accepts, so nothing can be rendered from a request that
//! failed validation.

use crate::catalog::hash::{HashFormat, parse_format_list};
use crate::error::RequestError;
use crate::mode::{Mode, ModeFlags};

/// Number of lines produced when no count is given.
pub const DEFAULT_COUNT: i64 = 50;

/// A request as configured by the caller.
///
/// # Example
///
/// ```
/// use decoy_creds::{GenerationRequest, Mode, ModeFlags};
///
/// let request = GenerationRequest {
///     count: 3,
///     flags: ModeFlags { hash: true, ..ModeFlags::default() },
///     formats: Some("md5,lm".to_owned()),
///     seed: Some(42),
///     annotate: true,
/// };
/// let validated = request.validate().expect("valid request");
///
/// assert_eq!(validated.count(), 3);
/// assert_eq!(validated.modes(), &[Mode::Hash]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Number of lines to produce; must be at least one.
    pub count: i64,
    /// Mode flags as supplied.
    pub flags: ModeFlags,
    /// Comma-separated hash format names, used only in hash mode.
    pub formats: Option<String>,
    /// Seed for deterministic output.
    pub seed: Option<u64>,
    /// Whether each line is prefixed with its `[tag]`.
    pub annotate: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            flags: ModeFlags::default(),
            formats: None,
            seed: None,
            annotate: false,
        }
    }
}

impl GenerationRequest {
    /// Checks the count, resolves modes, and parses hash formats.
    ///
    /// Format names are only checked when hash mode survives mode
    /// resolution; a missing list selects [`HashFormat::DEFAULTS`].
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidCount`] for a count below one, and
    /// [`RequestError::UnknownFormats`] or [`RequestError::NoFormats`] for a
    /// bad format list.
    pub fn validate(&self) -> Result<ValidatedRequest, RequestError> {
        let count = usize::try_from(self.count)
            .ok()
            .filter(|count| *count >= 1)
            .ok_or(RequestError::InvalidCount { count: self.count })?;

        let modes = self.flags.resolve();
        let formats = if modes.contains(&Mode::Hash) {
            match self.formats.as_deref() {
                Some(list) => parse_format_list(list)?,
                None => HashFormat::DEFAULTS.to_vec(),
            }
        } else {
            Vec::new()
        };

        Ok(ValidatedRequest {
            count,
            modes,
            formats,
            seed: self.seed,
            annotate: self.annotate,
        })
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    count: usize,
    modes: Vec<Mode>,
    formats: Vec<HashFormat>,
    seed: Option<u64>,
    annotate: bool,
}

impl ValidatedRequest {
    /// Number of lines to generate.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Resolved modes; never empty.
    #[must_use]
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Hash formats to draw from; empty unless hash mode is active.
    #[must_use]
    pub fn formats(&self) -> &[HashFormat] {
        &self.formats
    }

    /// Seed for deterministic output.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether lines carry a `[tag]` prefix.
    #[must_use]
    pub const fn annotate(&self) -> bool {
        self.annotate
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn hash_request(formats: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            flags: ModeFlags {
                hash: true,
                ..ModeFlags::default()
            },
            formats: formats.map(str::to_owned),
            ..GenerationRequest::default()
        }
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn rejects_counts_below_one(#[case] count: i64) {
        let request = GenerationRequest {
            count,
            ..GenerationRequest::default()
        };
        assert_eq!(request.validate(), Err(RequestError::InvalidCount { count }));
    }

    #[test]
    fn defaults_to_fifty_hash_lines_from_the_default_mix() {
        let validated = GenerationRequest::default().validate().expect("valid");

        assert_eq!(validated.count(), 50);
        assert_eq!(validated.modes(), &[Mode::Hash]);
        assert_eq!(validated.formats(), &HashFormat::DEFAULTS);
        assert!(!validated.annotate());
        assert_eq!(validated.seed(), None);
    }

    #[test]
    fn rejects_unknown_format_names() {
        let err = hash_request(Some("md5,bogus"))
            .validate()
            .expect_err("unknown format");

        let RequestError::UnknownFormats { unknown, valid } = err else {
            panic!("expected unknown formats error");
        };
        assert_eq!(unknown, vec!["bogus".to_owned()]);
        assert_eq!(valid, HashFormat::valid_names());
    }

    #[test]
    fn count_is_checked_before_formats() {
        let request = GenerationRequest {
            count: 0,
            ..hash_request(Some("bogus"))
        };
        assert_eq!(
            request.validate(),
            Err(RequestError::InvalidCount { count: 0 })
        );
    }

    #[test]
    fn ignores_formats_when_hash_mode_is_not_active() {
        let request = GenerationRequest {
            flags: ModeFlags {
                token: true,
                ..ModeFlags::default()
            },
            formats: Some("bogus".to_owned()),
            ..GenerationRequest::default()
        };
        let validated = request.validate().expect("hash mode inactive");

        assert_eq!(validated.modes(), &[Mode::Token]);
        assert!(validated.formats().is_empty());
    }

    #[test]
    fn keeps_requested_formats_in_order() {
        let validated = hash_request(Some("sha512, lm")).validate().expect("valid");
        assert_eq!(validated.formats(), &[HashFormat::Sha512, HashFormat::Lm]);
    }
}

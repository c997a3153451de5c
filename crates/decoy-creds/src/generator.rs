//! Line generation for a validated request.
//!
//! The generator builds its [`RandomSource`] from the request's seed and owns
//! it for the duration of one run. Every draw, including the per-line mode and
//! format choice, goes through that source, so a seeded run is reproducible
//! end to end.

use std::fmt;

use tracing::debug;

use crate::catalog::credentials::{generate_credential_pair, generate_password, generate_username};
use crate::catalog::payload::generate_payload;
use crate::catalog::tokens::{generate_encrypted_credential, generate_token};
use crate::error::{GenerationError, SourceError};
use crate::mode::Mode;
use crate::request::ValidatedRequest;
use crate::source::RandomSource;

/// One rendered value with its optional annotation tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Category or format tag, present when annotation was requested.
    pub tag: Option<String>,
    /// Rendered value.
    pub value: String,
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "[{tag}] {}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// Produces the lines for one validated request.
///
/// # Example
///
/// ```
/// use decoy_creds::{GenerationRequest, Generator, render_lines};
///
/// let request = GenerationRequest { count: 2, seed: Some(7), ..GenerationRequest::default() }
///     .validate()
///     .expect("valid request");
/// let lines = Generator::new(&request)
///     .and_then(Generator::generate)
///     .expect("generated");
///
/// assert_eq!(render_lines(&lines).lines().count(), 2);
/// ```
#[derive(Debug)]
pub struct Generator<'a> {
    request: &'a ValidatedRequest,
    source: RandomSource,
}

impl<'a> Generator<'a> {
    /// Binds a request to a source seeded from [`ValidatedRequest::seed`], or
    /// to a secure source when the request carries no seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Source`] if a secure source is needed and
    /// the OS cannot supply entropy.
    pub fn new(request: &'a ValidatedRequest) -> Result<Self, GenerationError> {
        let source = RandomSource::from_seed(request.seed())?;
        Ok(Self { request, source })
    }

    /// Generates every requested line, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Capacity`] when the requested count cannot
    /// be held in memory. Draw failures surface as
    /// [`GenerationError::Source`], which a validated request rules out.
    pub fn generate(mut self) -> Result<Vec<OutputLine>, GenerationError> {
        debug!(
            count = self.request.count(),
            modes = ?self.request.modes(),
            formats = ?self.request.formats(),
            seeded = self.source.seed().is_some(),
            "generating lines"
        );
        let count = self.request.count();
        let mut lines = Vec::new();
        lines
            .try_reserve_exact(count)
            .map_err(|err| GenerationError::Capacity {
                count,
                message: err.to_string(),
            })?;
        for _ in 0..count {
            lines.push(self.next_line()?);
        }
        Ok(lines)
    }

    fn next_line(&mut self) -> Result<OutputLine, SourceError> {
        let mode = match self.request.modes() {
            [single] => *single,
            modes => *self.source.choice(modes)?,
        };
        let (tag, value) = self.render(mode)?;
        Ok(OutputLine {
            tag: self.request.annotate().then_some(tag),
            value,
        })
    }

    fn render(&mut self, mode: Mode) -> Result<(String, String), SourceError> {
        let source = &mut self.source;
        let value = match mode {
            Mode::Hash => {
                let formats = self.request.formats();
                let index = source.index(formats.len())?;
                let format = formats.get(index).ok_or(SourceError::EmptyCollection)?;
                return Ok((format.name().to_owned(), format.render(source)?));
            }
            Mode::Password => generate_password(source, false)?,
            Mode::WeakPassword => generate_password(source, true)?,
            Mode::Username => generate_username(source)?,
            Mode::Credentials => generate_credential_pair(source, false)?.to_string(),
            Mode::DefaultCredentials => generate_credential_pair(source, true)?.to_string(),
            Mode::Token => generate_token(source)?,
            Mode::EncryptedCredential => generate_encrypted_credential(source)?,
            Mode::Payload => generate_payload(source)?.to_owned(),
        };
        Ok((mode.tag().to_owned(), value))
    }
}

/// Joins lines with `\n` and appends a single trailing newline.
///
/// # Example
///
/// ```
/// use decoy_creds::{OutputLine, render_lines};
///
/// let lines = vec![
///     OutputLine { tag: Some("md5".to_owned()), value: "abc".to_owned() },
///     OutputLine { tag: None, value: "def".to_owned() },
/// ];
/// assert_eq!(render_lines(&lines), "[md5] abc\ndef\n");
/// ```
#[must_use]
pub fn render_lines(lines: &[OutputLine]) -> String {
    let mut text = lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::catalog::hash::HashFormat;
    use crate::mode::ModeFlags;
    use crate::request::GenerationRequest;

    fn request_for(flags: ModeFlags, count: i64, annotate: bool) -> GenerationRequest {
        GenerationRequest {
            count,
            flags,
            annotate,
            ..GenerationRequest::default()
        }
    }

    fn run(request: &GenerationRequest, seed: u64) -> Vec<OutputLine> {
        let seeded = GenerationRequest {
            seed: Some(seed),
            ..request.clone()
        }
        .validate()
        .expect("valid request");
        Generator::new(&seeded)
            .and_then(Generator::generate)
            .expect("generation succeeds")
    }

    #[test]
    fn produces_exactly_count_lines() {
        let request = request_for(ModeFlags::default(), 17, false);
        assert_eq!(run(&request, 1).len(), 17);
    }

    #[test]
    fn seeded_runs_are_identical() {
        let flags = ModeFlags {
            hash: true,
            token: true,
            default_credentials: true,
            ..ModeFlags::default()
        };
        let request = request_for(flags, 100, true);

        assert_eq!(run(&request, 42), run(&request, 42));
        assert_ne!(run(&request, 42), run(&request, 43));
    }

    #[test]
    fn hash_lines_are_tagged_with_their_format() {
        let request = request_for(ModeFlags::default(), 200, true);
        let names: Vec<&str> = HashFormat::DEFAULTS.iter().map(|f| f.name()).collect();

        for line in run(&request, 8) {
            let tag = line.tag.expect("annotated");
            assert!(names.contains(&tag.as_str()), "{tag}");
        }
    }

    #[rstest]
    #[case(ModeFlags { password: true, ..ModeFlags::default() }, "password")]
    #[case(ModeFlags { username: true, ..ModeFlags::default() }, "username")]
    #[case(ModeFlags { credentials: true, ..ModeFlags::default() }, "credential")]
    #[case(ModeFlags { default_credentials: true, ..ModeFlags::default() }, "default")]
    #[case(ModeFlags { weak: true, ..ModeFlags::default() }, "weak")]
    #[case(ModeFlags { token: true, ..ModeFlags::default() }, "token")]
    #[case(ModeFlags { encrypted: true, ..ModeFlags::default() }, "encrypted")]
    #[case(ModeFlags { payload: true, ..ModeFlags::default() }, "payload")]
    fn single_modes_use_their_tag(#[case] flags: ModeFlags, #[case] tag: &str) {
        let request = request_for(flags, 20, true);
        for line in run(&request, 3) {
            assert_eq!(line.tag.as_deref(), Some(tag));
            assert!(line.to_string().starts_with(&format!("[{tag}] ")));
        }
    }

    #[test]
    fn unannotated_lines_have_no_tag() {
        let request = request_for(ModeFlags::default(), 10, false);
        assert!(run(&request, 3).iter().all(|line| line.tag.is_none()));
    }

    #[test]
    fn mixed_modes_draw_from_every_mode() {
        let flags = ModeFlags {
            token: true,
            payload: true,
            encrypted: true,
            ..ModeFlags::default()
        };
        let request = request_for(flags, 300, true);
        let lines = run(&request, 12);

        for tag in ["token", "payload", "encrypted"] {
            assert!(
                lines.iter().any(|line| line.tag.as_deref() == Some(tag)),
                "no {tag} line"
            );
        }
    }

    #[test]
    fn source_follows_the_request_seed() {
        let request = request_for(ModeFlags::default(), 3, false);
        let seeded = GenerationRequest {
            seed: Some(11),
            ..request.clone()
        }
        .validate()
        .expect("valid request");
        let unseeded = request.validate().expect("valid request");

        let deterministic = Generator::new(&seeded).expect("seeded source");
        let secure = Generator::new(&unseeded).expect("secure source");

        assert_eq!(deterministic.source.seed(), Some(11));
        assert_eq!(secure.source.seed(), None);
    }

    #[test]
    fn unreservable_count_is_an_error_not_a_panic() {
        let request = request_for(ModeFlags::default(), i64::MAX, false);
        let seeded = GenerationRequest {
            seed: Some(1),
            ..request
        }
        .validate()
        .expect("count is valid");

        let err = Generator::new(&seeded)
            .and_then(Generator::generate)
            .expect_err("buffer cannot be reserved");

        assert!(
            matches!(err, GenerationError::Capacity { count, .. } if count == seeded.count()),
            "{err}"
        );
    }

    #[test]
    fn render_lines_appends_single_trailing_newline() {
        let lines = vec![OutputLine {
            tag: None,
            value: "only".to_owned(),
        }];
        assert_eq!(render_lines(&lines), "only\n");
    }
}

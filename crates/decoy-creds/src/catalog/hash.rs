//! Password hash formats.
//!
//! Each [`HashFormat`] variant knows its literal prefixes, numeric parameter
//! ranges, and field alphabets. Rendering draws every variable part from the
//! supplied [`RandomSource`]; nothing is ever hashed.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{b64_unpadded, hex_lower, hex_upper};
use crate::error::{RequestError, SourceError};
use crate::source::RandomSource;

/// The 64-symbol alphabet used by bcrypt salts and checksums.
pub const BCRYPT_ALPHABET: &str = "./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// The 64-symbol alphabet used by `crypt(3)` checksums.
pub const CRYPT_ALPHABET: &str = "./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Alphabet for `crypt(3)` salts.
const CRYPT_SALT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789./";

/// Alphabet for Django salts.
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BCRYPT_SALT_LEN: usize = 22;
const BCRYPT_CHECKSUM_LEN: usize = 31;
const SHA512_CRYPT_LEN: usize = 86;
const SHA256_CRYPT_LEN: usize = 43;
const MD5_CRYPT_LEN: usize = 22;
const DJANGO_SALT_LEN: usize = 12;

/// A named password-hash encoding.
///
/// # Example
///
/// ```
/// use decoy_creds::{HashFormat, RandomSource};
///
/// let format: HashFormat = "bcrypt".parse().expect("known format");
/// let mut source = RandomSource::seeded(42);
/// let hash = format.render(&mut source).expect("rendered");
///
/// assert!(hash.starts_with("$2b$"));
/// assert_eq!(hash.len(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFormat {
    /// 32 lowercase hex characters.
    Md5,
    /// 40 lowercase hex characters.
    Sha1,
    /// 64 lowercase hex characters.
    Sha256,
    /// 128 lowercase hex characters.
    Sha512,
    /// 32 lowercase hex characters.
    Ntlm,
    /// 32 uppercase hex characters.
    Lm,
    /// `*` followed by 40 uppercase hex characters.
    Mysql5,
    /// Modular crypt `$2b$` string.
    Bcrypt,
    /// PHC-style argon2id string.
    Argon2id,
    /// Passlib-style `$pbkdf2-sha256$` string.
    Pbkdf2Sha256,
    /// Passlib-style `$scrypt$` string.
    Scrypt,
    /// glibc `$6$` SHA-512 crypt.
    Sha512Crypt,
    /// glibc `$5$` SHA-256 crypt.
    Sha256Crypt,
    /// `$1$` MD5 crypt.
    Md5Crypt,
    /// Django `pbkdf2_sha256$` string.
    DjangoPbkdf2Sha256,
}

impl HashFormat {
    /// Every format in the catalog.
    pub const ALL: [Self; 15] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha512,
        Self::Ntlm,
        Self::Lm,
        Self::Mysql5,
        Self::Bcrypt,
        Self::Argon2id,
        Self::Pbkdf2Sha256,
        Self::Scrypt,
        Self::Sha512Crypt,
        Self::Sha256Crypt,
        Self::Md5Crypt,
        Self::DjangoPbkdf2Sha256,
    ];

    /// The mix drawn from when no format list is supplied.
    pub const DEFAULTS: [Self; 12] = [
        Self::Bcrypt,
        Self::Argon2id,
        Self::Pbkdf2Sha256,
        Self::Scrypt,
        Self::Sha512Crypt,
        Self::Sha256Crypt,
        Self::Md5Crypt,
        Self::Sha256,
        Self::Sha1,
        Self::Md5,
        Self::Ntlm,
        Self::Mysql5,
    ];

    /// Returns the format identifier used on the command line and in
    /// annotations.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Ntlm => "ntlm",
            Self::Lm => "lm",
            Self::Mysql5 => "mysql5",
            Self::Bcrypt => "bcrypt",
            Self::Argon2id => "argon2id",
            Self::Pbkdf2Sha256 => "pbkdf2-sha256",
            Self::Scrypt => "scrypt",
            Self::Sha512Crypt => "sha512crypt",
            Self::Sha256Crypt => "sha256crypt",
            Self::Md5Crypt => "md5crypt",
            Self::DjangoPbkdf2Sha256 => "django-pbkdf2-sha256",
        }
    }

    /// Returns every format name in sorted order.
    #[must_use]
    pub fn valid_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(|format| format.name()).collect();
        names.sort_unstable();
        names
    }

    /// Renders one value in this format.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] only if a catalog constant is malformed.
    pub fn render(self, source: &mut RandomSource) -> Result<String, SourceError> {
        let value = match self {
            Self::Md5 | Self::Ntlm => hex_lower(source, 16),
            Self::Sha1 => hex_lower(source, 20),
            Self::Sha256 => hex_lower(source, 32),
            Self::Sha512 => hex_lower(source, 64),
            Self::Lm => hex_upper(source, 16),
            Self::Mysql5 => format!("*{}", hex_upper(source, 20)),
            Self::Bcrypt => render_bcrypt(source)?,
            Self::Argon2id => render_argon2id(source)?,
            Self::Pbkdf2Sha256 => render_pbkdf2_sha256(source)?,
            Self::Scrypt => render_scrypt(source)?,
            Self::Sha512Crypt => render_sha_crypt(source, "6", SHA512_CRYPT_LEN)?,
            Self::Sha256Crypt => render_sha_crypt(source, "5", SHA256_CRYPT_LEN)?,
            Self::Md5Crypt => render_md5_crypt(source)?,
            Self::DjangoPbkdf2Sha256 => render_django_pbkdf2(source)?,
        };
        Ok(value)
    }
}

impl fmt::Display for HashFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFormat {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| RequestError::UnknownFormats {
                unknown: vec![s.to_owned()],
                valid: Self::valid_names(),
            })
    }
}

/// Parses a comma-separated list of format names.
///
/// Entries are trimmed and blank entries are skipped. Every unknown name is
/// reported at once.
///
/// # Errors
///
/// Returns [`RequestError::UnknownFormats`] naming each unrecognised entry,
/// or [`RequestError::NoFormats`] when the list holds no names.
///
/// # Example
///
/// ```
/// use decoy_creds::{HashFormat, parse_format_list};
///
/// let formats = parse_format_list(" md5, lm ,,").expect("known names");
/// assert_eq!(formats, vec![HashFormat::Md5, HashFormat::Lm]);
/// assert!(parse_format_list("md5,bogus").is_err());
/// ```
pub fn parse_format_list(input: &str) -> Result<Vec<HashFormat>, RequestError> {
    let mut formats = Vec::new();
    let mut unknown = Vec::new();

    for name in input.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        match name.parse::<HashFormat>() {
            Ok(format) => formats.push(format),
            Err(_) => unknown.push(name.to_owned()),
        }
    }

    if !unknown.is_empty() {
        return Err(RequestError::UnknownFormats {
            unknown,
            valid: HashFormat::valid_names(),
        });
    }
    if formats.is_empty() {
        return Err(RequestError::NoFormats);
    }
    Ok(formats)
}

fn render_bcrypt(source: &mut RandomSource) -> Result<String, SourceError> {
    let cost = source.int_range(4_u32, 15)?;
    let salt = source.string(BCRYPT_ALPHABET, BCRYPT_SALT_LEN)?;
    let checksum = source.string(BCRYPT_ALPHABET, BCRYPT_CHECKSUM_LEN)?;
    Ok(format!("$2b${cost:02}${salt}{checksum}"))
}

fn render_argon2id(source: &mut RandomSource) -> Result<String, SourceError> {
    let memory = source.int_range(32_768_u32, 131_072)?;
    let time = source.int_range(2_u32, 5)?;
    let lanes = source.int_range(1_u32, 4)?;
    let salt = b64_unpadded(source, 16);
    let digest = b64_unpadded(source, 32);
    Ok(format!(
        "$argon2id$v=19$m={memory},t={time},p={lanes}${salt}${digest}"
    ))
}

fn render_pbkdf2_sha256(source: &mut RandomSource) -> Result<String, SourceError> {
    let rounds = source.int_range(20_000_u32, 400_000)?;
    let salt = b64_unpadded(source, 12);
    let digest = b64_unpadded(source, 32);
    Ok(format!("$pbkdf2-sha256${rounds}${salt}${digest}"))
}

fn render_scrypt(source: &mut RandomSource) -> Result<String, SourceError> {
    let log_n = source.int_range(12_u32, 17)?;
    let block_size = source.int_range(8_u32, 16)?;
    let parallelism = source.int_range(1_u32, 2)?;
    let salt = b64_unpadded(source, 12);
    let digest = b64_unpadded(source, 32);
    Ok(format!(
        "$scrypt$ln={log_n},r={block_size},p={parallelism}${salt}${digest}"
    ))
}

fn render_sha_crypt(
    source: &mut RandomSource,
    id: &str,
    checksum_len: usize,
) -> Result<String, SourceError> {
    let rounds = source.int_range(5_000_u32, 200_000)?;
    let salt_len = source.int_range(8_usize, 16)?;
    let salt = source.string(CRYPT_SALT_ALPHABET, salt_len)?;
    let checksum = source.string(CRYPT_ALPHABET, checksum_len)?;
    Ok(format!("${id}$rounds={rounds}${salt}${checksum}"))
}

fn render_md5_crypt(source: &mut RandomSource) -> Result<String, SourceError> {
    let salt_len = source.int_range(8_usize, 12)?;
    let salt = source.string(CRYPT_SALT_ALPHABET, salt_len)?;
    let checksum = source.string(CRYPT_ALPHABET, MD5_CRYPT_LEN)?;
    Ok(format!("$1${salt}${checksum}"))
}

fn render_django_pbkdf2(source: &mut RandomSource) -> Result<String, SourceError> {
    let iterations = source.int_range(120_000_u32, 720_000)?;
    let salt = source.string(ALPHANUMERIC, DJANGO_SALT_LEN)?;
    let digest = b64_unpadded(source, 32);
    Ok(format!("pbkdf2_sha256${iterations}${salt}${digest}"))
}

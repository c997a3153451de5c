//! Passwords, usernames, and credential pairs.
//!
//! The word lists and probability constants fix the distribution of every
//! generated password and username.

use std::fmt;

use crate::error::SourceError;
use crate::source::RandomSource;

/// Chance (in percent) that a weak-mode password comes straight from
/// [`COMMON_WEAK_PASSWORDS`].
pub const WEAK_LIST_PERCENT: u32 = 60;

/// Chance (in percent) that a normal-mode password comes straight from
/// [`COMMON_WEAK_PASSWORDS`].
pub const NORMAL_LIST_PERCENT: u32 = 30;

/// Chance (in percent) that a username comes from [`COMMON_USERNAMES`].
pub const COMMON_USERNAME_PERCENT: u32 = 50;

/// Chance (in percent) that a common username gets a numeric suffix.
pub const USERNAME_SUFFIX_PERCENT: u32 = 30;

/// Chance (in percent) that default mode returns a listed default pair.
pub const DEFAULT_CREDENTIAL_PERCENT: u32 = 70;

const PERCENT: u32 = 100;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const LETTERS_AND_DIGITS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Passwords that show up at the top of every breach corpus.
pub const COMMON_WEAK_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "1234",
    "12345",
    "qwerty",
    "abc123",
    "password1",
    "Password1",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "1234567890",
    "dragon",
    "master",
    "sunshine",
    "princess",
    "football",
    "shadow",
    "superman",
    "qwerty123",
    "michael",
    "jordan",
    "trustno1",
    "batman",
    "thomas",
    "hockey",
    "ranger",
    "daniel",
    "hannah",
    "maggie",
    "jessica",
    "charlie",
    "welcome123",
    "password123",
    "admin123",
];

/// Service and account names commonly probed by scanners.
pub const COMMON_USERNAMES: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "user",
    "guest",
    "test",
    "demo",
    "support",
    "info",
    "webmaster",
    "mail",
    "ftp",
    "www",
    "api",
    "service",
    "system",
    "default",
    "operator",
    "manager",
    "staff",
];

/// Factory-default `(username, password)` pairs.
pub const DEFAULT_CREDENTIALS: &[(&str, &str)] = &[
    ("admin", "admin"),
    ("admin", "password"),
    ("admin", "1234"),
    ("admin", "12345"),
    ("root", "root"),
    ("root", "admin"),
    ("root", "password"),
    ("user", "user"),
    ("user", "password"),
    ("guest", "guest"),
    ("test", "test"),
    ("support", "support"),
    ("administrator", "admin"),
    ("administrator", "password"),
    ("cisco", "cisco"),
    ("ubnt", "ubnt"),
    ("pi", "raspberry"),
    ("ftp", "ftp"),
    ("admin", "changeme"),
];

/// Shapes used when a password is synthesized rather than listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PasswordPattern {
    /// `password` + 1..=9999.
    PasswordNumber,
    /// `admin` + 1..=9999.
    AdminNumber,
    /// `user` + 1..=9999.
    UserNumber,
    /// `pass` + 1000..=9999.
    PassFourDigits,
    /// 4-8 lowercase letters + 1..=999.
    LowerWordNumber,
    /// One capital, 3-7 lowercase letters, then 1..=99.
    CapitalWordNumber,
    /// 6-12 letters and digits.
    Alphanumeric,
    /// 5-10 lowercase letters then 2-4 digits.
    LowerWordDigits,
}

impl PasswordPattern {
    const ALL: [Self; 8] = [
        Self::PasswordNumber,
        Self::AdminNumber,
        Self::UserNumber,
        Self::PassFourDigits,
        Self::LowerWordNumber,
        Self::CapitalWordNumber,
        Self::Alphanumeric,
        Self::LowerWordDigits,
    ];

    fn render(self, source: &mut RandomSource) -> Result<String, SourceError> {
        let value = match self {
            Self::PasswordNumber => format!("password{}", source.int_range(1_u32, 9_999)?),
            Self::AdminNumber => format!("admin{}", source.int_range(1_u32, 9_999)?),
            Self::UserNumber => format!("user{}", source.int_range(1_u32, 9_999)?),
            Self::PassFourDigits => format!("pass{}", source.int_range(1_000_u32, 9_999)?),
            Self::LowerWordNumber => {
                let len = source.int_range(4_usize, 8)?;
                let word = source.string(LOWERCASE, len)?;
                format!("{word}{}", source.int_range(1_u32, 999)?)
            }
            Self::CapitalWordNumber => {
                let initial = source.string(UPPERCASE, 1)?;
                let len = source.int_range(3_usize, 7)?;
                let rest = source.string(LOWERCASE, len)?;
                format!("{initial}{rest}{}", source.int_range(1_u32, 99)?)
            }
            Self::Alphanumeric => {
                let len = source.int_range(6_usize, 12)?;
                source.string(LETTERS_AND_DIGITS, len)?
            }
            Self::LowerWordDigits => {
                let word_len = source.int_range(5_usize, 10)?;
                let word = source.string(LOWERCASE, word_len)?;
                let digit_len = source.int_range(2_usize, 4)?;
                let digits = source.string(DIGITS, digit_len)?;
                format!("{word}{digits}")
            }
        };
        Ok(value)
    }
}

/// Generates one password.
///
/// With `weak` set, the listed weak passwords are drawn
/// [`WEAK_LIST_PERCENT`]% of the time, otherwise [`NORMAL_LIST_PERCENT`]%.
/// The remainder is synthesized from a random pattern.
///
/// # Errors
///
/// Returns [`SourceError`] only if a catalog constant is malformed.
///
/// # Example
///
/// ```
/// use decoy_creds::RandomSource;
/// use decoy_creds::catalog::credentials::generate_password;
///
/// let mut source = RandomSource::seeded(1);
/// let password = generate_password(&mut source, true).expect("password");
/// assert!(!password.is_empty());
/// ```
pub fn generate_password(source: &mut RandomSource, weak: bool) -> Result<String, SourceError> {
    let list_percent = if weak {
        WEAK_LIST_PERCENT
    } else {
        NORMAL_LIST_PERCENT
    };
    if source.chance(list_percent, PERCENT)? {
        return source
            .choice(COMMON_WEAK_PASSWORDS)
            .map(|password| (*password).to_owned());
    }
    let pattern = *source.choice(&PasswordPattern::ALL)?;
    pattern.render(source)
}

/// Generates one username.
///
/// # Errors
///
/// Returns [`SourceError`] only if a catalog constant is malformed.
pub fn generate_username(source: &mut RandomSource) -> Result<String, SourceError> {
    if source.chance(COMMON_USERNAME_PERCENT, PERCENT)? {
        let base = *source.choice(COMMON_USERNAMES)?;
        if source.chance(USERNAME_SUFFIX_PERCENT, PERCENT)? {
            return Ok(format!("{base}{}", source.int_range(1_u32, 99)?));
        }
        return Ok(base.to_owned());
    }
    let len = source.int_range(4_usize, 10)?;
    source.string(LOWERCASE, len)
}

/// A `username:password` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    /// Account name.
    pub username: String,
    /// Secret paired with the account.
    pub password: String,
}

impl fmt::Display for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.username, self.password)
    }
}

/// Generates a credential pair.
///
/// In default mode a listed factory default is returned
/// [`DEFAULT_CREDENTIAL_PERCENT`]% of the time. Every other pair combines a
/// generated username with a weak password.
///
/// # Errors
///
/// Returns [`SourceError`] only if a catalog constant is malformed.
pub fn generate_credential_pair(
    source: &mut RandomSource,
    default: bool,
) -> Result<CredentialPair, SourceError> {
    if default && source.chance(DEFAULT_CREDENTIAL_PERCENT, PERCENT)? {
        let (username, password) = *source.choice(DEFAULT_CREDENTIALS)?;
        return Ok(CredentialPair {
            username: username.to_owned(),
            password: password.to_owned(),
        });
    }
    let username = generate_username(source)?;
    let password = generate_password(source, true)?;
    Ok(CredentialPair { username, password })
}

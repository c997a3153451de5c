//! Generation modes and flag resolution.

use std::fmt;

/// A category of decoy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Password hashes; lines are tagged with the concrete format name.
    Hash,
    /// Mixed passwords.
    Password,
    /// Usernames.
    Username,
    /// `username:password` pairs.
    Credentials,
    /// Pairs biased towards factory defaults.
    DefaultCredentials,
    /// Passwords biased towards the weak list.
    WeakPassword,
    /// Tokens, session IDs, and API keys.
    Token,
    /// Encrypted or encoded credential blobs.
    EncryptedCredential,
    /// Injection payloads.
    Payload,
}

impl Mode {
    /// Category label for this mode.
    ///
    /// Annotated non-hash lines use this tag. Annotated hash lines use the
    /// concrete format name instead, so `"hash"` only appears through
    /// [`Display`](fmt::Display).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Password => "password",
            Self::Username => "username",
            Self::Credentials => "credential",
            Self::DefaultCredentials => "default",
            Self::WeakPassword => "weak",
            Self::Token => "token",
            Self::EncryptedCredential => "encrypted",
            Self::Payload => "payload",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Mode flags exactly as supplied on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "one field per independent command-line switch"
)]
pub struct ModeFlags {
    /// `--hash`.
    pub hash: bool,
    /// `--pass`.
    pub password: bool,
    /// `--user`.
    pub username: bool,
    /// `--creds`.
    pub credentials: bool,
    /// `--default`.
    pub default_credentials: bool,
    /// `--weak`.
    pub weak: bool,
    /// `--bypass`.
    pub token: bool,
    /// `--decrypt`.
    pub encrypted: bool,
    /// `--payload`.
    pub payload: bool,
}

impl ModeFlags {
    /// Resolves the flags into the set of modes drawn from per line.
    ///
    /// Precedence, applied once:
    /// - no flag at all selects [`Mode::Hash`];
    /// - `--user` with `--pass` and without `--creds` selects only
    ///   [`Mode::Credentials`];
    /// - `--user` without `--pass` selects only [`Mode::Username`];
    /// - `--pass` without `--user` selects only [`Mode::Password`];
    /// - otherwise every flagged mode is kept in flag order.
    ///
    /// # Example
    ///
    /// ```
    /// use decoy_creds::{Mode, ModeFlags};
    ///
    /// let flags = ModeFlags { username: true, password: true, ..ModeFlags::default() };
    /// assert_eq!(flags.resolve(), vec![Mode::Credentials]);
    /// assert_eq!(ModeFlags::default().resolve(), vec![Mode::Hash]);
    /// ```
    #[must_use]
    pub fn resolve(&self) -> Vec<Mode> {
        let flagged: Vec<Mode> = [
            (self.hash, Mode::Hash),
            (self.password, Mode::Password),
            (self.username, Mode::Username),
            (self.credentials, Mode::Credentials),
            (self.default_credentials, Mode::DefaultCredentials),
            (self.weak, Mode::WeakPassword),
            (self.token, Mode::Token),
            (self.encrypted, Mode::EncryptedCredential),
            (self.payload, Mode::Payload),
        ]
        .into_iter()
        .filter_map(|(set, mode)| set.then_some(mode))
        .collect();

        if flagged.is_empty() {
            return vec![Mode::Hash];
        }
        match (self.username, self.password) {
            (true, true) if !self.credentials => vec![Mode::Credentials],
            (true, false) => vec![Mode::Username],
            (false, true) => vec![Mode::Password],
            _ => flagged,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn flags(apply: impl FnOnce(&mut ModeFlags)) -> ModeFlags {
        let mut value = ModeFlags::default();
        apply(&mut value);
        value
    }

    #[rstest]
    #[case::nothing(flags(|_| {}), vec![Mode::Hash])]
    #[case::user_and_pass(flags(|f| { f.username = true; f.password = true; }), vec![Mode::Credentials])]
    #[case::user_only(flags(|f| f.username = true), vec![Mode::Username])]
    #[case::pass_only(flags(|f| f.password = true), vec![Mode::Password])]
    #[case::user_pass_hash(
        flags(|f| { f.username = true; f.password = true; f.hash = true; }),
        vec![Mode::Credentials]
    )]
    #[case::user_with_token(flags(|f| { f.username = true; f.token = true; }), vec![Mode::Username])]
    #[case::user_pass_creds(
        flags(|f| { f.username = true; f.password = true; f.credentials = true; }),
        vec![Mode::Password, Mode::Username, Mode::Credentials]
    )]
    #[case::many(
        flags(|f| { f.hash = true; f.token = true; f.payload = true; }),
        vec![Mode::Hash, Mode::Token, Mode::Payload]
    )]
    #[case::weak(flags(|f| f.weak = true), vec![Mode::WeakPassword])]
    fn resolves_flags(#[case] input: ModeFlags, #[case] expected: Vec<Mode>) {
        assert_eq!(input.resolve(), expected);
    }

    #[rstest]
    #[case(Mode::Hash, "hash")]
    #[case(Mode::Password, "password")]
    #[case(Mode::Credentials, "credential")]
    #[case(Mode::DefaultCredentials, "default")]
    #[case(Mode::EncryptedCredential, "encrypted")]
    fn tags_match_annotation_labels(#[case] mode: Mode, #[case] tag: &str) {
        assert_eq!(mode.tag(), tag);
        assert_eq!(mode.to_string(), tag);
    }
}

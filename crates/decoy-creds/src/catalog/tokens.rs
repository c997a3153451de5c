//! Authentication tokens and encrypted credential blobs.
//!
//! Both categories are literal templates wrapped around random hex or base64
//! payloads. Byte counts below are the number of random bytes encoded, not
//! the rendered width.

use crate::catalog::{b64_padded, b64_unpadded, hex_lower};
use crate::error::SourceError;
use crate::source::RandomSource;

/// Token, session, and API-key templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTemplate {
    /// `Bearer <hex 32 bytes>`.
    Bearer,
    /// `session_id=<base64 24 bytes>`.
    SessionId,
    /// `api_key_<hex 40 bytes>`.
    ApiKey,
    /// `token:<base64 32 bytes>`.
    Token,
    /// `JWT.<base64 20 bytes>.<base64 20 bytes>`.
    Jwt,
    /// `auth_token=<hex 36 bytes>`.
    AuthToken,
    /// `X-API-Key: <hex 32 bytes>`.
    ApiKeyHeader,
    /// `session=<base64 28 bytes>`.
    SessionCookie,
}

impl TokenTemplate {
    /// Every token template.
    pub const ALL: [Self; 8] = [
        Self::Bearer,
        Self::SessionId,
        Self::ApiKey,
        Self::Token,
        Self::Jwt,
        Self::AuthToken,
        Self::ApiKeyHeader,
        Self::SessionCookie,
    ];

    /// Renders the template with fresh random payloads.
    #[must_use]
    pub fn render(self, source: &mut RandomSource) -> String {
        match self {
            Self::Bearer => format!("Bearer {}", hex_lower(source, 32)),
            Self::SessionId => format!("session_id={}", b64_unpadded(source, 24)),
            Self::ApiKey => format!("api_key_{}", hex_lower(source, 40)),
            Self::Token => format!("token:{}", b64_unpadded(source, 32)),
            Self::Jwt => {
                let header = b64_unpadded(source, 20);
                let claims = b64_unpadded(source, 20);
                format!("JWT.{header}.{claims}")
            }
            Self::AuthToken => format!("auth_token={}", hex_lower(source, 36)),
            Self::ApiKeyHeader => format!("X-API-Key: {}", hex_lower(source, 32)),
            Self::SessionCookie => format!("session={}", b64_unpadded(source, 28)),
        }
    }
}

/// Templates resembling stored ciphertext or encoded secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptedTemplate {
    /// `ENC(<padded base64 16 bytes>)`.
    EncParens,
    /// `{encrypted}<base64 24 bytes>`.
    EncryptedBrace,
    /// `ciphertext:<hex 32 bytes>`.
    Ciphertext,
    /// `AES256:<base64 32 bytes>`.
    Aes256,
    /// `encrypted:<hex 40 bytes>`.
    EncryptedHex,
    /// `{cipher}<base64 20 bytes>`.
    CipherBrace,
    /// `ENC[<hex 24 bytes>]`.
    EncBrackets,
}

impl EncryptedTemplate {
    /// Every encrypted-credential template.
    pub const ALL: [Self; 7] = [
        Self::EncParens,
        Self::EncryptedBrace,
        Self::Ciphertext,
        Self::Aes256,
        Self::EncryptedHex,
        Self::CipherBrace,
        Self::EncBrackets,
    ];

    /// Renders the template with a fresh random payload.
    #[must_use]
    pub fn render(self, source: &mut RandomSource) -> String {
        match self {
            Self::EncParens => format!("ENC({})", b64_padded(source, 16)),
            Self::EncryptedBrace => format!("{{encrypted}}{}", b64_unpadded(source, 24)),
            Self::Ciphertext => format!("ciphertext:{}", hex_lower(source, 32)),
            Self::Aes256 => format!("AES256:{}", b64_unpadded(source, 32)),
            Self::EncryptedHex => format!("encrypted:{}", hex_lower(source, 40)),
            Self::CipherBrace => format!("{{cipher}}{}", b64_unpadded(source, 20)),
            Self::EncBrackets => format!("ENC[{}]", hex_lower(source, 24)),
        }
    }
}

/// Generates one token drawn from a random [`TokenTemplate`].
///
/// # Errors
///
/// Returns [`SourceError`] only if the template table is empty.
pub fn generate_token(source: &mut RandomSource) -> Result<String, SourceError> {
    let template = *source.choice(&TokenTemplate::ALL)?;
    Ok(template.render(source))
}

/// Generates one encrypted credential drawn from a random
/// [`EncryptedTemplate`].
///
/// # Errors
///
/// Returns [`SourceError`] only if the template table is empty.
pub fn generate_encrypted_credential(source: &mut RandomSource) -> Result<String, SourceError> {
    let template = *source.choice(&EncryptedTemplate::ALL)?;
    Ok(template.render(source))
}

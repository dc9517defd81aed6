//! Secret token generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;

/// Random bytes behind an API key token (64 encoded characters).
const API_KEY_ENTROPY_BYTES: usize = 48;

/// Random bytes behind a password token (48 encoded characters).
const PASSWORD_ENTROPY_BYTES: usize = 36;

/// Class of generated token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    ApiKey,
    Password,
}

impl SecretKind {
    /// Number of random bytes drawn for this class.
    pub fn entropy_bytes(self) -> usize {
        match self {
            SecretKind::ApiKey => API_KEY_ENTROPY_BYTES,
            SecretKind::Password => PASSWORD_ENTROPY_BYTES,
        }
    }
}

/// Generate a URL-safe, unpadded random token.
///
/// The alphabet is `A-Z a-z 0-9 - _`, so the token can be embedded in a
/// `KEY=VALUE` line without quoting.
pub fn generate_secret(kind: SecretKind) -> String {
    let mut bytes = vec![0u8; kind.entropy_bytes()];
    // ThreadRng is a CSPRNG seeded from the OS.
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

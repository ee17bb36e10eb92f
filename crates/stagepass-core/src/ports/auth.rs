//! Authentication and authorization ports.

use crate::domain::Role;
use crate::error::RepoError;

/// Decoded claims carried by a bearer token.
///
/// The subject is the account email; the role is whatever the account held
/// when the token was minted.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: String,
    pub role: Role,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Token service trait for issuing and validating signed bearer tokens.
pub trait TokenService: Send + Sync {
    /// Mint a signed, time-limited token for a subject.
    fn issue(&self, subject: &str, role: Role) -> Result<String, AuthError>;

    /// Decode a token and recheck its signature and expiry.
    ///
    /// Purely cryptographic and time-based; whether the subject still exists
    /// is the caller's concern.
    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Why a token failed validation.
///
/// Callers outside the trust boundary only ever see these collapsed into
/// [`AuthError::Unauthenticated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token cannot be decoded")]
    Malformed,

    #[error("token signature mismatch")]
    BadSignature,

    #[error("token expired")]
    Expired,
}

/// Authentication and authorization failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("account disabled")]
    AccountDisabled,

    #[error("authentication required")]
    Unauthenticated,

    #[error("insufficient role")]
    Forbidden,

    #[error("user not found")]
    NotFound,

    #[error("internal failure: {0}")]
    Internal(String),
}

impl From<RepoError> for AuthError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AuthError::NotFound,
            other => AuthError::Internal(other.to_string()),
        }
    }
}

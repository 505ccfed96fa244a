use std::sync::Arc;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Coordinates credential verification with token issuance.
///
/// Shares a [`TokenCodec`] with whoever validates the tokens afterwards, so
/// everything issued and verified in one process uses one signing key.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: Arc<TokenCodec>,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    #[error("token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            codec,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the subject.
    ///
    /// # Arguments
    /// * `password` - plaintext password to verify
    /// * `stored_hash` - stored password hash
    /// * `subject` - username the token is issued for
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match the stored hash
    /// * `Password` - the stored hash could not be used for verification
    /// * `Token` - token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.codec.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without a credential check.
    ///
    /// For flows where the caller has already established the subject's
    /// identity, such as issuing the first token right after registration.
    ///
    /// # Errors
    /// * `TokenError` - token issuance failed
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        self.codec.issue(subject)
    }
}

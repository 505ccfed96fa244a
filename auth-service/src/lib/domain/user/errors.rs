use auth_core::PasswordError;
use auth_core::TokenError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Top-level error for the authentication flows
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("username already exists: {0}")]
    UsernameAlreadyExists(String),

    /// Unknown username, wrong password, or an inactive account; callers
    /// cannot tell which.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    #[error("token error: {0}")]
    Token(#[from] TokenError),

    #[error("database error: {0}")]
    DatabaseError(String),
}

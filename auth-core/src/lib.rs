//! Authentication building blocks
//!
//! The pieces a credential-based service needs to stay stateless:
//! - Password hashing (Argon2id)
//! - Signed, time-bounded bearer tokens (HS512)
//! - An authenticator coordinating credential checks with token issuance
//!
//! Tokens are self-contained: subject, issued-at, and expiry travel inside
//! the token, so verification needs nothing but the signing secret.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth_core::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(5));
//! let token = codec.issue("alice").unwrap();
//! assert!(codec.validate(&token));
//! assert_eq!(codec.extract_subject(&token).unwrap(), "alice");
//! ```
//!
//! ## Credential check plus token issuance
//! ```
//! use std::sync::Arc;
//!
//! use auth_core::{Authenticator, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = Arc::new(TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::hours(5),
//! ));
//! let auth = Authenticator::new(Arc::clone(&codec));
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify against the stored hash and issue a token
//! let issued = auth.authenticate("password123", &hash, "alice").unwrap();
//! assert_eq!(codec.extract_subject(&issued.access_token).unwrap(), "alice");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;

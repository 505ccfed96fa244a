use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued token.
///
/// The token is self-contained: these three fields are everything a verifier
/// needs besides the signing secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the username the token was issued for
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for a subject, expiring `validity` from now.
    ///
    /// A non-positive `validity` produces claims that are already expired,
    /// which tests use to exercise expiry handling.
    pub fn for_subject(subject: impl Into<String>, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }
}

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Encodes and verifies signed, time-bounded bearer tokens.
///
/// Uses HS512 (HMAC with SHA-512). The secret is injected once at
/// construction and never changes for the codec's lifetime; every token the
/// codec issues expires `validity` after issuance.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenCodec {
    /// Create a codec over a signing secret and a validity window.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens; at least 64 bytes for HS512
    /// * `validity` - How long issued tokens stay valid
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS512,
            validity,
        }
    }

    /// Issue a token for a subject.
    ///
    /// Claims are `{sub, iat = now, exp = now + validity}`.
    ///
    /// # Errors
    /// * `EncodingFailed` - signing failed; not expected in normal operation
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, self.validity);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode a token, verifying signature and expiry in one step.
    ///
    /// Expiry is exact: zero leeway, so a token is rejected the moment the
    /// current instant passes `exp`. The `exp` claim is required; a token
    /// without one is malformed.
    ///
    /// # Errors
    /// * `Expired` - signature verified but the token is past its expiry
    /// * `Malformed` - anything else: bad structure, bad signature, missing claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }

    /// Whether a presented token is currently acceptable.
    pub fn validate(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// The subject a token was issued for.
    ///
    /// # Errors
    /// Same as [`decode`](Self::decode); an unverifiable token has no
    /// trustworthy subject.
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token).map(|claims| claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-64-bytes-long-for-hs512!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, Duration::hours(5))
    }

    #[test]
    fn test_issue_and_decode_round_trip() {
        let codec = codec();

        let token = codec.issue("alice").expect("failed to issue token");
        let claims = codec.decode(&token).expect("failed to decode token");

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 5 * 60 * 60);
    }

    #[test]
    fn test_validate_is_true_immediately_after_issuance() {
        let codec = codec();
        let token = codec.issue("alice").expect("failed to issue token");
        assert!(codec.validate(&token));
    }

    #[test]
    fn test_extract_subject_round_trip() {
        let codec = codec();
        let token = codec.issue("bob").expect("failed to issue token");
        assert_eq!(codec.extract_subject(&token).unwrap(), "bob");
    }

    #[test]
    fn test_expired_token_is_rejected_as_expired() {
        // a codec with elapsed validity issues tokens that are already expired
        let expired = TokenCodec::new(SECRET, Duration::seconds(-30));
        let token = expired.issue("alice").expect("failed to issue token");

        let codec = codec();
        assert!(!codec.validate(&token));
        assert!(matches!(codec.decode(&token), Err(TokenError::Expired)));
        assert!(matches!(
            codec.extract_subject(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let codec = codec();

        assert!(!codec.validate("not.a.token"));
        assert!(matches!(
            codec.decode("not.a.token"),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_malformed() {
        let other = TokenCodec::new(b"another-secret-entirely-and-also-long-enough-for-hs512-use!!", Duration::hours(5));
        let token = other.issue("alice").expect("failed to issue token");

        let codec = codec();
        assert!(matches!(
            codec.decode(&token),
            Err(TokenError::Malformed(_))
        ));
    }
}

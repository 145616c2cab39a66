use crate::config::Config;
use crate::error::TokenError;
use crate::jwt::claims::Claims;
use crate::jwt::header::Header;
use crate::jwt::serializer::{decode_bytes, decode_segment, encode_segment};
use crate::jwt::signer::{HmacSigner, TokenSigner};
use crate::jwt::token::Token;
use tracing::{debug, error, warn};

/// Parses presented token strings and checks their validity.
///
/// Parsing is fail-fast and only rejects input that is not a token for
/// this verifier. Whether a well-formed token is still good (unexpired and
/// correctly signed) is a separate query, see [`TokenVerifier::is_valid`].
pub struct TokenVerifier<S = HmacSigner> {
    signer: S,
    encoded_header: String,
}

impl TokenVerifier<HmacSigner> {
    /// Create an HMAC verifier from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &Config) -> Result<Self, TokenError> {
        config.validate()?;
        Self::with_signer(HmacSigner::from_config(config))
    }
}

impl<S: TokenSigner> TokenVerifier<S> {
    /// Create a verifier around any signer.
    ///
    /// # Errors
    ///
    /// Returns an error if the canonical header cannot be encoded.
    pub fn with_signer(signer: S) -> Result<Self, TokenError> {
        let encoded_header = encode_segment(&Header::new(signer.algorithm()))?;
        Ok(TokenVerifier {
            signer,
            encoded_header,
        })
    }

    /// Parse a token string without checking expiry or signature.
    ///
    /// # Errors
    ///
    /// * [`TokenError::MalformedToken`] unless there are exactly three
    ///   non-empty dot-separated segments.
    /// * [`TokenError::UnsupportedAlgorithm`] if the header segment is not
    ///   byte-identical to this verifier's canonical header.
    /// * [`TokenError::MalformedPayload`] if the payload cannot be decoded
    ///   or has no integer `exp`.
    pub fn parse(&self, token: &str) -> Result<Token, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(reject(TokenError::MalformedToken(format!(
                "expected 3 segments, got {}",
                parts.len()
            ))));
        }
        if parts.iter().any(|part| part.is_empty()) {
            return Err(reject(TokenError::MalformedToken(
                "empty segment".to_string(),
            )));
        }

        // Never adopt the presented algorithm, only compare
        if parts[0] != self.encoded_header {
            return Err(reject(TokenError::UnsupportedAlgorithm(format!(
                "header does not match {}",
                self.signer.algorithm()
            ))));
        }

        let claims: Claims = decode_segment(parts[1])
            .map_err(|e| reject(TokenError::MalformedPayload(e.to_string())))?;

        let parsed = Token::new(parts[0].to_string(), claims, parts[2].to_string())?;
        debug!(exp = parsed.expires_at(), "Parsed token");
        Ok(parsed)
    }

    /// True if the token is unexpired and its signature matches.
    pub fn is_valid(&self, token: &Token) -> bool {
        self.is_valid_at(token, chrono::Utc::now().timestamp())
    }

    /// Validity as of `now` (seconds since epoch). `exp` must be strictly
    /// greater than `now`.
    pub fn is_valid_at(&self, token: &Token, now: i64) -> bool {
        if token.is_expired_at(now) {
            debug!(exp = token.expires_at(), now, "Token expired");
            return false;
        }

        let Ok(presented) = decode_bytes(token.signature()) else {
            debug!("Token signature is not valid base64url");
            return false;
        };

        let signing_input = format!("{}.{}", self.encoded_header, token.encoded_claims());
        match self.signer.verify(signing_input.as_bytes(), &presented) {
            Ok(true) => true,
            Ok(false) => {
                warn!(alg = %self.signer.algorithm(), "Token signature mismatch");
                false
            }
            Err(e) => {
                error!(error = %e, code = e.code(), "Signer failed during validation");
                false
            }
        }
    }

    /// Parse and require validity in one call.
    ///
    /// # Errors
    ///
    /// Any [`parse`](Self::parse) error, or [`TokenError::InvalidToken`] if
    /// the token is expired or its signature does not match.
    pub fn verify(&self, token: &str) -> Result<Token, TokenError> {
        let parsed = self.parse(token)?;
        if self.is_valid(&parsed) {
            Ok(parsed)
        } else {
            Err(TokenError::InvalidToken)
        }
    }
}

fn reject(err: TokenError) -> TokenError {
    warn!(code = err.code(), error = %err, "Rejected token");
    err
}

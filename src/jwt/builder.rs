use crate::config::Config;
use crate::error::TokenError;
use crate::jwt::claims::Claims;
use crate::jwt::header::Header;
use crate::jwt::serializer::{encode_bytes, encode_segment};
use crate::jwt::signer::{HmacSigner, TokenSigner};
use crate::jwt::token::Token;
use std::time::Duration;
use tracing::debug;

/// Issues new signed tokens.
///
/// The algorithm, secret and expiry are captured at construction and never
/// change for the lifetime of the issuer.
pub struct TokenIssuer<S = HmacSigner> {
    signer: S,
    encoded_header: String,
    expiry_seconds: i64,
}

impl TokenIssuer<HmacSigner> {
    /// Create an HMAC issuer from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: &Config) -> Result<Self, TokenError> {
        config.validate()?;
        Self::with_signer(HmacSigner::from_config(config), config.expiry)
    }
}

impl<S: TokenSigner> TokenIssuer<S> {
    /// Create an issuer around any signer.
    ///
    /// # Errors
    ///
    /// Returns an error if `expiry` does not fit in a signed 64-bit second
    /// count or the header cannot be encoded.
    pub fn with_signer(signer: S, expiry: Duration) -> Result<Self, TokenError> {
        let expiry_seconds = i64::try_from(expiry.as_secs())
            .map_err(|_| TokenError::config("expiry is too large"))?;
        let encoded_header = encode_segment(&Header::new(signer.algorithm()))?;

        Ok(TokenIssuer {
            signer,
            encoded_header,
            expiry_seconds,
        })
    }

    /// Issue a token expiring `expiry` from now.
    pub fn issue(&self, subject: &str, name: &str) -> Result<Token, TokenError> {
        self.issue_at(subject, name, chrono::Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (seconds since epoch).
    pub fn issue_at(&self, subject: &str, name: &str, now: i64) -> Result<Token, TokenError> {
        let exp = now.saturating_add(self.expiry_seconds);
        let claims = Claims::new(subject.to_string(), name.to_string(), exp);

        let unsigned = Token::new(self.encoded_header.clone(), claims, String::new())?;
        let signature = self.signer.sign(unsigned.signing_input().as_bytes())?;
        let token = unsigned.with_signature(encode_bytes(&signature));

        debug!(subject, exp, alg = %self.signer.algorithm(), "Issued token");
        Ok(token)
    }

    pub fn signer(&self) -> &S {
        &self.signer
    }
}

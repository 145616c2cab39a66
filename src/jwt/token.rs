use crate::error::TokenError;
use crate::jwt::claims::Claims;
use crate::jwt::serializer::encode_segment;
use std::fmt;

/// A signed token.
///
/// Produced by [`TokenIssuer`](crate::jwt::TokenIssuer) or reconstructed by
/// [`TokenVerifier`](crate::jwt::TokenVerifier). The payload segment is the
/// canonical encoding of [`Claims`], so `to_string()` always yields the form
/// the signature was (or should have been) computed over.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    encoded_header: String,
    encoded_claims: String,
    claims: Claims,
    signature: String,
}

impl Token {
    pub(crate) fn new(
        encoded_header: String,
        claims: Claims,
        signature: String,
    ) -> Result<Self, TokenError> {
        let encoded_claims = encode_segment(&claims)?;
        Ok(Token {
            encoded_header,
            encoded_claims,
            claims,
            signature,
        })
    }

    pub(crate) fn with_signature(mut self, signature: String) -> Self {
        self.signature = signature;
        self
    }

    pub fn subject(&self) -> Result<&str, TokenError> {
        self.claims.sub.as_deref().ok_or(TokenError::MissingClaim("sub"))
    }

    pub fn name(&self) -> Result<&str, TokenError> {
        self.claims.name.as_deref().ok_or(TokenError::MissingClaim("name"))
    }

    /// Expiry in seconds since the Unix epoch.
    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }

    pub fn is_expired_at(&self, timestamp: i64) -> bool {
        self.claims.is_expired_at(timestamp)
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Look up an additional, uninterpreted claim.
    pub fn claim(&self, key: &str) -> Option<&serde_json::Value> {
        self.claims.extra.get(key)
    }

    /// Base64url signature segment exactly as issued or presented.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub(crate) fn encoded_claims(&self) -> &str {
        &self.encoded_claims
    }

    /// The `header.payload` string the signature covers.
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.encoded_header, self.encoded_claims)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.encoded_header, self.encoded_claims, self.signature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(claims: Claims) -> Token {
        Token::new("aGVhZGVy".to_string(), claims, "c2ln".to_string()).unwrap()
    }

    #[test]
    fn test_accessors() {
        let token = token_with(Claims::new("u1".to_string(), "Alice".to_string(), 99));

        assert_eq!(token.subject().unwrap(), "u1");
        assert_eq!(token.name().unwrap(), "Alice");
        assert_eq!(token.expires_at(), 99);
        assert_eq!(token.signature(), "c2ln");
        assert!(token.claim("role").is_none());
    }

    #[test]
    fn test_missing_claims() {
        let claims: Claims = serde_json::from_str(r#"{"exp":5,"role":"admin"}"#).unwrap();
        let token = token_with(claims);

        assert_eq!(token.subject(), Err(TokenError::MissingClaim("sub")));
        assert_eq!(token.name(), Err(TokenError::MissingClaim("name")));
        assert_eq!(token.claim("role"), Some(&serde_json::json!("admin")));
    }

    #[test]
    fn test_display_joins_three_segments() {
        let token = token_with(Claims::new("u1".to_string(), "Alice".to_string(), 99));
        let rendered = token.to_string();

        let parts: Vec<&str> = rendered.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "aGVhZGVy");
        assert_eq!(parts[2], "c2ln");
        assert_eq!(rendered, format!("{}.c2ln", token.signing_input()));
    }
}

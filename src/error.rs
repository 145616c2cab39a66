use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Unsupported algorithm or tampered header: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Missing claim: {0}")]
    MissingClaim(&'static str),

    #[error("Token encoding error: {0}")]
    Encode(String),

    #[error("Token decoding error: {0}")]
    Decode(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Token expired or signature mismatch")]
    InvalidToken,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        TokenError::Config(msg.into())
    }

    /// Create a signing error.
    #[must_use]
    pub fn signing(msg: impl Into<String>) -> Self {
        TokenError::Signing(msg.into())
    }

    /// Stable code suitable for embedding in a transport response.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            TokenError::MalformedToken(_) => TOKEN_MALFORMED,
            TokenError::UnsupportedAlgorithm(_) => TOKEN_UNSUPPORTED_ALGORITHM,
            TokenError::MalformedPayload(_) => TOKEN_MALFORMED_PAYLOAD,
            TokenError::MissingClaim(_) => TOKEN_MISSING_CLAIM,
            TokenError::Encode(_) => TOKEN_ENCODE_ERROR,
            TokenError::Decode(_) => TOKEN_DECODE_ERROR,
            TokenError::Signing(_) => TOKEN_SIGNING_ERROR,
            TokenError::InvalidToken => TOKEN_INVALID,
            TokenError::Config(_) => TOKEN_CONFIG_ERROR,
        }
    }

    /// True when the error was caused by the presented token rather than
    /// by this process's configuration or signing primitive.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(
            self,
            TokenError::Signing(_) | TokenError::Config(_) | TokenError::Encode(_)
        )
    }
}

// Error codes for transport responses
pub const TOKEN_MALFORMED: &str = "TOKEN_MALFORMED";
pub const TOKEN_UNSUPPORTED_ALGORITHM: &str = "TOKEN_UNSUPPORTED_ALGORITHM";
pub const TOKEN_MALFORMED_PAYLOAD: &str = "TOKEN_MALFORMED_PAYLOAD";
pub const TOKEN_MISSING_CLAIM: &str = "TOKEN_MISSING_CLAIM";
pub const TOKEN_ENCODE_ERROR: &str = "TOKEN_ENCODE_ERROR";
pub const TOKEN_DECODE_ERROR: &str = "TOKEN_DECODE_ERROR";
pub const TOKEN_SIGNING_ERROR: &str = "TOKEN_SIGNING_ERROR";
pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
pub const TOKEN_CONFIG_ERROR: &str = "TOKEN_CONFIG_ERROR";

//! HMAC-signed bearer tokens.
//!
//! Issues and verifies compact `header.payload.signature` tokens carrying a
//! subject, display name and expiry, so callers can be authenticated
//! without server-side session storage.
//!
//! ```
//! use hmac_jwt::{Config, TokenIssuer, TokenVerifier};
//!
//! let config = Config::new("change-this-secret");
//! let issuer = TokenIssuer::new(&config)?;
//! let verifier = TokenVerifier::new(&config)?;
//!
//! let wire = issuer.issue("u1", "Alice")?.to_string();
//! let token = verifier.parse(&wire)?;
//! assert!(verifier.is_valid(&token));
//! assert_eq!(token.subject()?, "u1");
//! # Ok::<(), hmac_jwt::TokenError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod jwt;
pub mod telemetry;

// Re-exports for convenience
pub use config::{Config, HmacAlgorithm};
pub use error::TokenError;
pub use jwt::{Token, TokenIssuer, TokenVerifier};

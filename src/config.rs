//! Token configuration.
//!
//! The signing secret, algorithm and expiry are fixed when a [`Config`] is
//! built and captured by every issuer and verifier created from it.

use crate::error::TokenError;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use zeroize::Zeroizing;

/// Placeholder secret used when none is configured. Never deploy with it.
pub const DEFAULT_SECRET: &str = "insecure-default-secret-change-me";

/// Default token lifetime: 90 days.
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(90 * 86_400);

/// HMAC signing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HmacAlgorithm {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-512
    #[default]
    HS512,
}

impl HmacAlgorithm {
    /// Get algorithm name for the token header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS512 => "HS512",
        }
    }

    /// Length in bytes of the signature this algorithm produces.
    #[must_use]
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::HS256 => 32,
            Self::HS512 => 64,
        }
    }
}

impl FromStr for HmacAlgorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HS256" => Ok(Self::HS256),
            "HS512" => Ok(Self::HS512),
            _ => Err(TokenError::config(format!("Invalid token algorithm: {}", s))),
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token configuration.
#[derive(Clone)]
pub struct Config {
    secret: Zeroizing<Vec<u8>>,
    /// Signing algorithm
    pub algorithm: HmacAlgorithm,
    /// Lifetime added to the issue time to produce `exp`
    pub expiry: Duration,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON formatted logs
    pub log_json: bool,
}

impl Config {
    /// Create a configuration with the given secret and default settings.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
            algorithm: HmacAlgorithm::default(),
            expiry: DEFAULT_EXPIRY,
            log_level: "info".to_string(),
            log_json: false,
        }
    }

    /// Set the algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the token lifetime.
    #[must_use]
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TokenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("TOKEN_SECRET").unwrap_or_else(|| {
            warn!("TOKEN_SECRET not set, using insecure default secret");
            DEFAULT_SECRET.to_string()
        });
        let algorithm = match lookup("TOKEN_ALGORITHM") {
            Some(value) => value.parse()?,
            None => HmacAlgorithm::default(),
        };
        let expiry = Duration::from_secs(parse_var(
            &lookup,
            "TOKEN_EXPIRY_SECS",
            DEFAULT_EXPIRY.as_secs(),
        )?);
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let log_json = parse_var(&lookup, "LOG_JSON", false)?;

        let config = Self {
            secret: Zeroizing::new(secret.into_bytes()),
            algorithm,
            expiry,
            log_level,
            log_json,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants issuers and verifiers rely on.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty secret or a zero or oversized expiry.
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::config("TOKEN_SECRET must not be empty"));
        }
        if self.expiry.is_zero() {
            return Err(TokenError::config("TOKEN_EXPIRY_SECS must be positive"));
        }
        if i64::try_from(self.expiry.as_secs()).is_err() {
            return Err(TokenError::config("TOKEN_EXPIRY_SECS is too large"));
        }
        Ok(())
    }

    /// Raw signing key bytes.
    #[must_use]
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// True if the insecure placeholder secret is in use.
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.secret.as_slice() == DEFAULT_SECRET.as_bytes()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("expiry", &self.expiry)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

/// Parse a variable with default value.
fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, TokenError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(name) {
        Some(val) => val
            .trim()
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {}: {}", name, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("HS256".parse::<HmacAlgorithm>().unwrap(), HmacAlgorithm::HS256);
        assert_eq!("hs512".parse::<HmacAlgorithm>().unwrap(), HmacAlgorithm::HS512);
        assert!("RS256".parse::<HmacAlgorithm>().is_err());
        assert!("".parse::<HmacAlgorithm>().is_err());
    }

    #[test]
    fn test_algorithm_metadata() {
        assert_eq!(HmacAlgorithm::HS256.as_str(), "HS256");
        assert_eq!(HmacAlgorithm::HS512.to_string(), "HS512");
        assert_eq!(HmacAlgorithm::HS256.digest_len(), 32);
        assert_eq!(HmacAlgorithm::HS512.digest_len(), 64);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert!(config.uses_default_secret());
        assert_eq!(config.algorithm, HmacAlgorithm::HS512);
        assert_eq!(config.expiry, Duration::from_secs(90 * 86_400));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn test_config_from_vars() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOKEN_SECRET", "s3cret"),
            ("TOKEN_ALGORITHM", "hs256"),
            ("TOKEN_EXPIRY_SECS", "3600"),
            ("LOG_JSON", "true"),
        ]))
        .unwrap();

        assert_eq!(config.secret(), b"s3cret");
        assert!(!config.uses_default_secret());
        assert_eq!(config.algorithm, HmacAlgorithm::HS256);
        assert_eq!(config.expiry, Duration::from_secs(3600));
        assert!(config.log_json);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[("TOKEN_EXPIRY_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, TokenError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("TOKEN_EXPIRY_SECS", "0")])).unwrap_err();
        assert!(matches!(err, TokenError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("TOKEN_SECRET", "")])).unwrap_err();
        assert!(matches!(err, TokenError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("TOKEN_ALGORITHM", "none")])).unwrap_err();
        assert!(matches!(err, TokenError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new("super-secret-value");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}

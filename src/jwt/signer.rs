//! Token signing traits and implementations.

use crate::config::{Config, HmacAlgorithm};
use crate::error::TokenError;
use ring::hmac;
use subtle::ConstantTimeEq;

/// Keyed-hash signer used by issuers and verifiers.
pub trait TokenSigner: Send + Sync {
    /// Sign data and return signature bytes.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, TokenError>;

    /// Algorithm advertised in the token header.
    fn algorithm(&self) -> HmacAlgorithm;

    /// Recompute the signature over `data` and compare it to `candidate`.
    ///
    /// Uses `subtle::ConstantTimeEq` so the comparison time does not depend
    /// on how many leading bytes match.
    fn verify(&self, data: &[u8], candidate: &[u8]) -> Result<bool, TokenError> {
        let expected = self.sign(data)?;

        // Digest length is public
        if expected.len() != candidate.len() {
            return Ok(false);
        }

        Ok(expected.as_slice().ct_eq(candidate).into())
    }
}

/// HMAC signer backed by `ring`.
pub struct HmacSigner {
    algorithm: HmacAlgorithm,
    key: hmac::Key,
}

impl HmacSigner {
    /// Create a signer for the given algorithm and secret.
    #[must_use]
    pub fn new(algorithm: HmacAlgorithm, secret: &[u8]) -> Self {
        let ring_algorithm = match algorithm {
            HmacAlgorithm::HS256 => hmac::HMAC_SHA256,
            HmacAlgorithm::HS512 => hmac::HMAC_SHA512,
        };
        Self {
            algorithm,
            key: hmac::Key::new(ring_algorithm, secret),
        }
    }

    /// Create a signer from the configured algorithm and secret.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.algorithm, config.secret())
    }
}

impl TokenSigner for HmacSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, TokenError> {
        let signature = hmac::sign(&self.key, data);
        Ok(signature.as_ref().to_vec())
    }

    fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

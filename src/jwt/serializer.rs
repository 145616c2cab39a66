//! Canonical segment encoding.
//!
//! A segment is compact JSON encoded as URL-safe base64 without padding.

use crate::error::TokenError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{de::DeserializeOwned, Serialize};

/// Serialize `value` to compact JSON and base64url-encode it.
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value).map_err(|e| TokenError::Encode(e.to_string()))?;
    Ok(encode_bytes(&json))
}

/// Base64url-decode `segment` and parse it as a JSON object.
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let json = decode_bytes(segment)?;
    serde_json::from_slice(&json).map_err(|e| TokenError::Decode(e.to_string()))
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    base64::Engine::encode(&URL_SAFE_NO_PAD, bytes)
}

pub fn decode_bytes(segment: &str) -> Result<Vec<u8>, TokenError> {
    if segment.is_empty() {
        return Err(TokenError::Decode("empty segment".to_string()));
    }
    base64::Engine::decode(&URL_SAFE_NO_PAD, segment).map_err(|e| TokenError::Decode(e.to_string()))
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token payload.
///
/// Serializes as `sub`, `name`, `exp`, then any additional claims sorted by
/// key, so re-encoding a decoded payload reproduces the signed bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: i64,

    // Preserved but not interpreted
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Claims {
    pub fn new(subject: String, name: String, exp: i64) -> Self {
        Claims {
            sub: Some(subject),
            name: Some(name),
            exp,
            extra: BTreeMap::new(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }

    /// A token expiring exactly at `timestamp` is already expired.
    pub fn is_expired_at(&self, timestamp: i64) -> bool {
        self.exp <= timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new("user-123".to_string(), "Alice".to_string(), 1_000);

        assert_eq!(claims.sub.as_deref(), Some("user-123"));
        assert_eq!(claims.name.as_deref(), Some("Alice"));
        assert_eq!(claims.exp, 1_000);
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims::new("u".to_string(), "n".to_string(), 1_000);

        assert!(claims.is_expired_at(1_001));
        assert!(claims.is_expired_at(1_000));
        assert!(!claims.is_expired_at(999));
    }

    #[test]
    fn test_serialization_order() {
        let mut claims = Claims::new("u1".to_string(), "Alice".to_string(), 42);
        claims.extra.insert("zeta".to_string(), serde_json::json!(1));
        claims.extra.insert("alpha".to_string(), serde_json::json!("a"));

        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(
            json,
            r#"{"sub":"u1","name":"Alice","exp":42,"alpha":"a","zeta":1}"#
        );
    }

    #[test]
    fn test_absent_identity_claims() {
        let claims: Claims = serde_json::from_str(r#"{"exp":7}"#).unwrap();

        assert_eq!(claims.sub, None);
        assert_eq!(claims.name, None);
        assert_eq!(serde_json::to_string(&claims).unwrap(), r#"{"exp":7}"#);
    }

    #[test]
    fn test_missing_exp_rejected() {
        let result: Result<Claims, _> = serde_json::from_str(r#"{"sub":"u1"}"#);
        assert!(result.is_err());
    }
}

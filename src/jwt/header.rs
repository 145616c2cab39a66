use crate::config::HmacAlgorithm;
use serde::{Deserialize, Serialize};

/// Token type carried in every header.
pub const TOKEN_TYPE: &str = "JWT";

/// Token header. Field order is the canonical serialization order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    pub fn new(algorithm: HmacAlgorithm) -> Self {
        Header {
            alg: algorithm.as_str().to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_json_is_canonical() {
        let json = serde_json::to_string(&Header::new(HmacAlgorithm::HS256)).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);

        let json = serde_json::to_string(&Header::new(HmacAlgorithm::HS512)).unwrap();
        assert_eq!(json, r#"{"alg":"HS512","typ":"JWT"}"#);
    }
}

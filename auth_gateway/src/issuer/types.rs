use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

/// Token endpoint response from the external issuer
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    #[allow(dead_code)]
    pub(crate) token_type: Option<String>,
    #[allow(dead_code)]
    pub(crate) expires_in: Option<u64>,
}

/// The verified subject the issuer vouches for after a code exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VerifiedSubject {
    pub(crate) email: String,
}

/// A response relayed verbatim from the issuer for unmatched routes
#[derive(Debug)]
pub struct ForwardedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_response_deserialization() {
        // Given a token endpoint response with optional fields present
        let json_data = json!({
            "access_token": "at_value",
            "token_type": "Bearer",
            "expires_in": 3599
        });

        let parsed: TokenResponse =
            serde_json::from_value(json_data).expect("should deserialize valid token response");

        assert_eq!(parsed.access_token, "at_value");
        assert_eq!(parsed.token_type.as_deref(), Some("Bearer"));
    }

    #[test]
    fn test_token_response_minimal() {
        // access_token alone is enough
        let parsed: TokenResponse = serde_json::from_value(json!({"access_token": "at"}))
            .expect("should deserialize minimal token response");
        assert_eq!(parsed.access_token, "at");
        assert!(parsed.expires_in.is_none());
    }

    #[test]
    fn test_token_response_missing_access_token_fails() {
        let result: Result<TokenResponse, _> =
            serde_json::from_value(json!({"token_type": "Bearer"}));
        assert!(
            result.is_err(),
            "Should fail to deserialize when access_token is missing"
        );
    }

    #[test]
    fn test_verified_subject_deserialization() {
        // Extra fields from the issuer are ignored
        let parsed: VerifiedSubject = serde_json::from_value(json!({
            "email": "alice@example.com",
            "sub": "user-1",
            "picture": null
        }))
        .expect("should deserialize subject info");
        assert_eq!(parsed.email, "alice@example.com");
    }

    #[test]
    fn test_verified_subject_requires_email() {
        let result: Result<VerifiedSubject, _> = serde_json::from_value(json!({"sub": "user-1"}));
        assert!(result.is_err(), "email is required");
    }
}

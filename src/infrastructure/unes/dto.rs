use serde::{Deserialize, Serialize};

/// Login request body sent to the portal token endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequestBody<'a> {
    /// Portal username.
    pub username: &'a str,
    /// Portal password.
    pub password: &'a str,
}

/// Portal API token response structure.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Issued access token.
    pub access_token: String,
    /// Token type, usually `Bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Token lifetime in seconds, if the portal reports one.
    pub expires_in: Option<i64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Portal API error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the portal.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_deserialization() {
        let json = r#"{"access_token":"abc123","token_type":"Bearer","expires_in":3600}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.access_token, "abc123");
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, Some(3600));
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let json = r#"{"access_token":"abc123"}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, None);
    }

    #[test]
    fn test_login_request_serialization() {
        let body = LoginRequestBody {
            username: "student123",
            password: "hunter2",
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["username"], "student123");
        assert_eq!(json["password"], "hunter2");
    }
}

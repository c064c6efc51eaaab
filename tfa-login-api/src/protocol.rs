use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/login";
pub const TFA_PATH: &str = "/api/tfa";

/// Number of digits of a verification code.
pub const CODE_LENGTH: usize = 6;

/// Body of `POST /api/login`
///
/// Missing fields deserialize to empty strings, they never match a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /api/tfa`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TfaRequest {
    #[serde(rename = "tfaCode")]
    pub tfa_code: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

/// Success body of both endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: User,
}

/// Failure body of both endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tfa_request_uses_camel_case_field() {
        let value = serde_json::to_value(TfaRequest { tfa_code: 123456 }).unwrap();
        assert_eq!(value, json!({ "tfaCode": 123456 }));

        let parsed: TfaRequest = serde_json::from_value(json!({ "tfaCode": 42 })).unwrap();
        assert_eq!(parsed.tfa_code, 42);
    }

    #[test]
    fn login_request_tolerates_missing_fields() {
        let parsed: LoginRequest = serde_json::from_value(json!({ "email": "a@b.com" })).unwrap();
        assert_eq!(parsed.email, "a@b.com");
        assert!(parsed.password.is_empty());

        let parsed: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, LoginRequest::default());
    }
}

//! Canned answers of the development backend.
//!
//! Both the development server and the in-process mock service of the desktop
//! client answer with this table, so a scenario triggered against one behaves
//! the same against the other.

use std::time::Duration;

use serde::Serialize;

use crate::protocol::{ErrorResponse, LoginRequest, TfaRequest, TokenResponse, User};

/// Simulated processing time of every request.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(800);

pub const MOCK_TOKEN: &str = "mock-jwt-token-123";

// Trigger values
pub const VALID_EMAIL: &str = "test@test.com";
pub const VALID_PASSWORD: &str = "12345678";
pub const VALID_CODE: u32 = 123456;
pub const SERVER_ERROR_EMAIL: &str = "server@error.com";
pub const RATE_LIMIT_EMAIL: &str = "rate@limit.com";
pub const FAIL_EMAIL: &str = "user@fail.com";
pub const WRONG_PASSWORD: &str = "wrongpassword";

// Messages
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests. Please try again in 60 seconds.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email address or password.";
pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred while signing in. Please try again later.";
pub const INVALID_CODE_MESSAGE: &str = "Invalid two-factor authentication code.";

/// Body of an answer, serialized without any envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Token(TokenResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub status: u16,
    pub reply: Reply,
}

impl Answer {
    fn token(email: &str) -> Self {
        Self {
            status: 200,
            reply: Reply::Token(TokenResponse {
                token: MOCK_TOKEN.to_string(),
                user: User {
                    email: email.to_string(),
                },
            }),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            reply: Reply::Error(ErrorResponse::new(message)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.reply)
    }
}

/// Answer of `POST /api/login`.
///
/// Rows are checked in order, the first matching row wins.
pub fn login(req: &LoginRequest) -> Answer {
    if req.email == SERVER_ERROR_EMAIL {
        return Answer::error(500, SERVER_ERROR_MESSAGE);
    }
    if req.email == RATE_LIMIT_EMAIL {
        return Answer::error(429, RATE_LIMIT_MESSAGE);
    }
    if req.email == FAIL_EMAIL || req.password == WRONG_PASSWORD {
        return Answer::error(401, INVALID_CREDENTIALS_MESSAGE);
    }
    if req.email == VALID_EMAIL && req.password == VALID_PASSWORD {
        return Answer::token(&req.email);
    }
    Answer::error(404, LOGIN_ERROR_MESSAGE)
}

/// Answer of `POST /api/tfa`.
pub fn verify(req: &TfaRequest) -> Answer {
    if req.tfa_code == VALID_CODE {
        Answer::token(VALID_EMAIL)
    } else {
        Answer::error(401, INVALID_CODE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn login_req(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_table() {
        let cases = [
            (SERVER_ERROR_EMAIL, VALID_PASSWORD, 500),
            (RATE_LIMIT_EMAIL, VALID_PASSWORD, 429),
            (FAIL_EMAIL, "anything", 401),
            ("someone@else.com", WRONG_PASSWORD, 401),
            (VALID_EMAIL, VALID_PASSWORD, 200),
            (VALID_EMAIL, "87654321", 404),
            ("someone@else.com", VALID_PASSWORD, 404),
        ];
        for (email, password, status) in cases {
            assert_eq!(
                login(&login_req(email, password)).status,
                status,
                "{} / {}",
                email,
                password
            );
        }
    }

    #[test]
    fn login_rows_are_ordered() {
        // The server error row wins over the wrong password row.
        let answer = login(&login_req(SERVER_ERROR_EMAIL, WRONG_PASSWORD));
        assert_eq!(answer.status, 500);
        // The wrong password row wins over the success row.
        let answer = login(&login_req(VALID_EMAIL, WRONG_PASSWORD));
        assert_eq!(answer.status, 401);
    }

    #[test]
    fn login_bodies() {
        let ok = login(&login_req(VALID_EMAIL, VALID_PASSWORD));
        assert!(ok.is_success());
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&ok.to_json().unwrap()).unwrap(),
            json!({ "token": MOCK_TOKEN, "user": { "email": VALID_EMAIL } })
        );

        let limited = login(&login_req(RATE_LIMIT_EMAIL, ""));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&limited.to_json().unwrap()).unwrap(),
            json!({ "message": RATE_LIMIT_MESSAGE })
        );
    }

    #[test]
    fn verify_table() {
        assert_eq!(verify(&TfaRequest { tfa_code: VALID_CODE }).status, 200);
        for code in [0, 1, 123457, 654321, 999999] {
            let answer = verify(&TfaRequest { tfa_code: code });
            assert_eq!(answer.status, 401);
            assert_eq!(
                answer.reply,
                Reply::Error(ErrorResponse::new(INVALID_CODE_MESSAGE))
            );
        }
    }
}

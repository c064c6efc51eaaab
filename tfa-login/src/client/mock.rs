use std::time::Duration;

use async_trait::async_trait;
use tfa_login_api::{
    mock::{self, Answer, Reply},
    LoginRequest, TfaRequest, TokenResponse,
};

use super::{AuthError, AuthService, Endpoint};

/// In-process backend answering with the development scenarios.
#[derive(Debug, Clone)]
pub struct MockService {
    delay: Duration,
}

impl Default for MockService {
    fn default() -> Self {
        Self {
            delay: mock::PROCESSING_DELAY,
        }
    }
}

impl MockService {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    async fn answer(&self, endpoint: Endpoint, answer: Answer) -> Result<TokenResponse, AuthError> {
        tokio::time::sleep(self.delay).await;
        match answer.reply {
            Reply::Token(token) if answer.is_success() => Ok(token),
            Reply::Token(_) => Err(AuthError::Unexpected {
                status: answer.status,
                message: String::new(),
            }),
            Reply::Error(e) => Err(AuthError::from_status(endpoint, answer.status, e.message)),
        }
    }
}

#[async_trait]
impl AuthService for MockService {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let answer = mock::login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        });
        tracing::debug!("Mock login answer: {}", answer.status);
        self.answer(Endpoint::Login, answer).await.map(|_| ())
    }

    async fn verify_code(&self, code: u32) -> Result<TokenResponse, AuthError> {
        let answer = mock::verify(&TfaRequest { tfa_code: code });
        tracing::debug!("Mock verification answer: {}", answer.status);
        self.answer(Endpoint::Tfa, answer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_table() {
        let service = MockService::with_delay(Duration::ZERO);
        let cases = [
            (mock::SERVER_ERROR_EMAIL, mock::VALID_PASSWORD, Some(500)),
            (mock::RATE_LIMIT_EMAIL, mock::VALID_PASSWORD, Some(429)),
            (mock::FAIL_EMAIL, mock::VALID_PASSWORD, Some(401)),
            (mock::VALID_EMAIL, mock::WRONG_PASSWORD, Some(401)),
            ("jane@doe.com", mock::VALID_PASSWORD, Some(404)),
            (mock::VALID_EMAIL, mock::VALID_PASSWORD, None),
        ];
        for (email, password, status) in cases {
            let res = service.login(email, password).await;
            match status {
                None => assert_eq!(res, Ok(())),
                Some(500) => assert!(matches!(res, Err(AuthError::ServerError(_)))),
                Some(429) => assert!(matches!(res, Err(AuthError::RateLimited(_)))),
                Some(401) => assert!(matches!(res, Err(AuthError::InvalidCredentials(_)))),
                Some(_) => assert!(matches!(res, Err(AuthError::NotFound(_)))),
            }
        }
    }

    #[tokio::test]
    async fn verify() {
        let service = MockService::with_delay(Duration::ZERO);
        let token = service.verify_code(mock::VALID_CODE).await.unwrap();
        assert_eq!(token.token, mock::MOCK_TOKEN);

        assert_eq!(
            service.verify_code(12345).await,
            Err(AuthError::InvalidCode(mock::INVALID_CODE_MESSAGE.to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn answers_after_delay() {
        let service = MockService::default();
        let start = tokio::time::Instant::now();
        service.verify_code(mock::VALID_CODE).await.unwrap();
        assert!(start.elapsed() >= mock::PROCESSING_DELAY);
    }
}

pub mod http;
pub mod mock;

use async_trait::async_trait;
use tfa_login_api::TokenResponse;

pub use http::HttpClient;
pub use mock::MockService;

/// Shown when no usable answer came back from the backend.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while signing in";

/// Endpoint an error status was returned from, a 401 means a different
/// thing on each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Tfa,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("server error: {0}")]
    ServerError(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("invalid code: {0}")]
    InvalidCode(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(String),
}

impl AuthError {
    pub fn from_status(endpoint: Endpoint, status: u16, message: String) -> Self {
        match (endpoint, status) {
            (_, 500) => Self::ServerError(message),
            (_, 429) => Self::RateLimited(message),
            (Endpoint::Login, 401) => Self::InvalidCredentials(message),
            (Endpoint::Tfa, 401) => Self::InvalidCode(message),
            (_, 404) => Self::NotFound(message),
            (_, status) => Self::Unexpected { status, message },
        }
    }

    /// Message to display to the user.
    ///
    /// The server message is shown as is, transport failures and empty
    /// messages fall back to a generic one.
    pub fn user_message(&self) -> &str {
        match self {
            Self::ServerError(message)
            | Self::RateLimited(message)
            | Self::InvalidCredentials(message)
            | Self::InvalidCode(message)
            | Self::NotFound(message)
            | Self::Unexpected { message, .. }
                if !message.is_empty() =>
            {
                message
            }
            _ => GENERIC_ERROR_MESSAGE,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Backend of the login flow
#[async_trait]
pub trait AuthService: std::fmt::Debug + Send + Sync {
    /// Check the credentials, on success a code is sent to the user.
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;
    /// Exchange the one-time code for a session token.
    async fn verify_code(&self, code: u32) -> Result<TokenResponse, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let msg = || "boom".to_string();
        assert_eq!(
            AuthError::from_status(Endpoint::Login, 500, msg()),
            AuthError::ServerError(msg())
        );
        assert_eq!(
            AuthError::from_status(Endpoint::Tfa, 429, msg()),
            AuthError::RateLimited(msg())
        );
        assert_eq!(
            AuthError::from_status(Endpoint::Login, 401, msg()),
            AuthError::InvalidCredentials(msg())
        );
        assert_eq!(
            AuthError::from_status(Endpoint::Tfa, 401, msg()),
            AuthError::InvalidCode(msg())
        );
        assert_eq!(
            AuthError::from_status(Endpoint::Login, 404, msg()),
            AuthError::NotFound(msg())
        );
        assert_eq!(
            AuthError::from_status(Endpoint::Login, 400, msg()),
            AuthError::Unexpected {
                status: 400,
                message: msg()
            }
        );
    }

    #[test]
    fn user_message() {
        assert_eq!(
            AuthError::RateLimited("slow down".to_string()).user_message(),
            "slow down"
        );
        assert_eq!(
            AuthError::InvalidCode(String::new()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
        let err = AuthError::Transport("connection refused".to_string());
        assert!(err.is_transport());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}

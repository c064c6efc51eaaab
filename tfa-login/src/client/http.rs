use async_trait::async_trait;
use reqwest::{IntoUrl, Method, RequestBuilder, Response};
use serde::Serialize;
use tfa_login_api::{ErrorResponse, LoginRequest, TfaRequest, TokenResponse, LOGIN_PATH, TFA_PATH};

use super::{AuthError, AuthService, Endpoint};

/// Client of the login API
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    url: String,
}

impl HttpClient {
    pub fn new(url: &str) -> Self {
        HttpClient {
            http: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let req = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json");
        tracing::debug!("Sending http request: {:?}", req);
        req
    }

    /// Post `body` to `path`.
    ///
    /// Any status but 200 is an error, its message is read from the body
    /// when the body holds one.
    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &B,
    ) -> Result<Response, AuthError> {
        let response: Response = self
            .request(Method::POST, format!("{}{}", self.url, path))
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let message = match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { message }) => message,
                Err(e) => {
                    tracing::debug!("No error message in {} answer: {}", status, e);
                    String::new()
                }
            };
            return Err(AuthError::from_status(endpoint, status, message));
        }

        Ok(response)
    }
}

#[async_trait]
impl AuthService for HttpClient {
    async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post(Endpoint::Login, LOGIN_PATH, &request).await?;
        Ok(())
    }

    async fn verify_code(&self, code: u32) -> Result<TokenResponse, AuthError> {
        let response = self
            .post(Endpoint::Tfa, TFA_PATH, &TfaRequest { tfa_code: code })
            .await?;
        Ok(response.json().await?)
    }
}

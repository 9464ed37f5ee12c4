//! Login client

use chat_common::{AppError, AppResult, Credential};
use tracing::{info, instrument};

use crate::api::ApiClient;
use crate::dto::{LoginRequest, LoginResponse};

/// Exchanges account credentials for a session [`Credential`]
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    /// Create a new AuthClient
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Log in with email and password
    ///
    /// POST /auth/login
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Credential> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::invalid_input("email and password are required"));
        }

        let url = self.api.endpoint(&["auth", "login"])?;
        let request = self.api.post(url).json(&LoginRequest { email, password });

        let response: LoginResponse = match self.api.send_json(request).await {
            Ok(response) => response,
            Err(AppError::Unauthenticated) => return Err(AppError::InvalidCredentials),
            Err(e) => return Err(e),
        };

        let credential = Credential::new(response.access_token)?;
        info!("Logged in");
        Ok(credential)
    }
}

//! Base HTTP client
//!
//! Owns the `reqwest` client and the backend base URL, builds endpoint URLs
//! and turns transport failures and non-2xx responses into [`AppError`]s.

use chat_common::{AppError, AppResult, ClientConfig, Credential};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::dto::ApiErrorBody;

/// Shared HTTP client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for `base_url` with default settings
    pub fn new(base_url: &str) -> AppResult<Self> {
        Self::from_config(&ClientConfig::with_base_url(base_url))
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| AppError::Config(format!("invalid API base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "API base URL cannot carry paths: {base_url}"
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::internal)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    pub fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Config(format!("API base URL cannot carry paths: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http.post(url)
    }

    pub(crate) fn put(&self, url: Url) -> RequestBuilder {
        self.http.put(url)
    }

    pub(crate) fn delete(&self, url: Url) -> RequestBuilder {
        self.http.delete(url)
    }

    /// Attach the bearer header
    pub(crate) fn authorize(request: RequestBuilder, credential: &Credential) -> RequestBuilder {
        request.header(reqwest::header::AUTHORIZATION, credential.bearer())
    }

    /// Send a request and require a 2xx status
    pub(crate) async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Response received");

        if status.is_success() {
            return Ok(response);
        }
        Err(status_error(response).await)
    }

    /// Send a request and decode a JSON body from the 2xx response
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> AppResult<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Map a `reqwest` failure that happened before a status was received
pub(crate) fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout
    } else {
        AppError::Network(err.to_string())
    }
}

async fn status_error(response: Response) -> AppError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return AppError::Unauthenticated;
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });

    warn!(status = status.as_u16(), message = %message, "Request failed");
    AppError::api(status.as_u16(), message)
}

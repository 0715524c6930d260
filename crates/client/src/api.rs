//! The REST client.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::token::TokenStore;

/// Generic REST client for the versioned backend API.
///
/// Cheap to clone; all clones share the connection pool and the session
/// store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get(&self, path: &str, require_auth: bool) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None, require_auth).await
    }

    pub async fn post(&self, path: &str, body: &Value, require_auth: bool) -> Result<Value, ApiError> {
        self.request(Method::POST, path, Some(body), require_auth).await
    }

    pub async fn put(&self, path: &str, body: &Value, require_auth: bool) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, Some(body), require_auth).await
    }

    pub async fn patch(&self, path: &str, body: &Value, require_auth: bool) -> Result<Value, ApiError> {
        self.request(Method::PATCH, path, Some(body), require_auth).await
    }

    /// DELETE, optionally with a JSON body (soft deletes carry the reason).
    /// A `204 No Content` response yields `Value::Null`.
    pub async fn delete(
        &self,
        path: &str,
        body: Option<&Value>,
        require_auth: bool,
    ) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, body, require_auth).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        require_auth: bool,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let request_id = Uuid::now_v7();

        let mut req = self
            .http
            .request(method.clone(), &url)
            .timeout(self.config.timeout);

        if require_auth {
            // Fail fast: an authenticated call without a session never
            // reaches the network.
            let token = self.tokens.access_token().ok_or(ApiError::MissingToken)?;
            req = req.bearer_auth(token);
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        tracing::debug!(%request_id, %method, path, "sending API request");

        let response = req.send().await.map_err(|err| {
            if err.is_timeout() {
                tracing::warn!(%request_id, path, "API request timed out");
                ApiError::Timeout
            } else {
                tracing::warn!(%request_id, path, error = %err, "API request failed to send");
                ApiError::Network(err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &body);
            tracing::warn!(%request_id, path, status = status.as_u16(), "API request rejected");
            return Err(err);
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

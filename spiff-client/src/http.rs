//! HTTP client wrapper
//!
//! Thin reqwest wrapper that speaks the unified `ApiResponse` envelope.
//! Responses are decoded strictly: anything that is not the documented
//! envelope is an `InvalidResponse` error, never probed for other shapes.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::ApiResponse;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the console backend API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(self.client.get(self.url(path))).await?;
        Self::decode_data(response)
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(self.client.post(self.url(path)).json(body))
            .await?;
        Self::decode_data(response)
    }

    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(self.client.put(self.url(path)).json(body))
            .await?;
        Self::decode_data(response)
    }

    /// POST whose success response carries no data payload
    pub async fn post_empty<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        self.request::<Value>(self.client.post(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    /// PUT whose success response carries no data payload
    pub async fn put_empty<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        self.request::<Value>(self.client.put(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send the request and decode the envelope, mapping failures onto the
    /// client error taxonomy
    async fn request<T: DeserializeOwned>(
        &self,
        mut builder: reqwest::RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        if let Some(token) = &self.token {
            builder = builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Backend-produced errors still use the envelope; transport-level
            // errors fall back to status mapping.
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<Value>>(&text) {
                return Err(ClientError::Api {
                    code: envelope.code,
                    message: envelope.message,
                });
            }
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::FORBIDDEN => ClientError::Forbidden(text),
                StatusCode::NOT_FOUND => ClientError::NotFound(text),
                StatusCode::BAD_REQUEST => ClientError::Validation(text),
                _ => ClientError::Internal(text),
            });
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("bad envelope: {}", e)))?;
        if !envelope.is_success() {
            return Err(ClientError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }

    fn decode_data<T>(envelope: ApiResponse<T>) -> ClientResult<T> {
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data".into()))
    }
}

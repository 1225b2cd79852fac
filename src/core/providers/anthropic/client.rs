//! Anthropic Client
//!
//! Thin wrapper over the Messages API. One attempt per call, bounded by the
//! configured deadline, with HTTP failures mapped onto [`ProviderError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::{Value, json};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::core::providers::{GenerationRequest, GenerationResponse, ProviderError, TextGenerator};

use super::PROVIDER_NAME;
use super::config::AnthropicConfig;

const MESSAGES_ENDPOINT: &str = "/v1/messages";

/// Anthropic API client
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    config: AnthropicConfig,
    http_client: Client,
}

impl AnthropicClient {
    /// Create a client. A missing API key is not an error here; calls made
    /// without one fail with [`ProviderError::NotConfigured`].
    pub fn new(config: AnthropicConfig) -> Result<Self, ProviderError> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                ProviderError::network(PROVIDER_NAME, format!("Invalid proxy URL: {}", e))
            })?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder.build().map_err(|e| {
            ProviderError::network(PROVIDER_NAME, format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Client configuration
    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    /// Build the Messages API request body
    fn transform_request(request: &GenerationRequest) -> Value {
        json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "system": request.system,
            "messages": [
                { "role": "user", "content": request.user }
            ],
        })
    }

    fn build_headers(&self, api_key: &str) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();

        let key_header = HeaderValue::from_str(api_key).map_err(|_| {
            ProviderError::authentication(PROVIDER_NAME, "API key contains invalid characters")
        })?;
        headers.insert("x-api-key", key_header);

        if let Ok(version_header) = HeaderValue::from_str(&self.config.api_version) {
            headers.insert("anthropic-version", version_header);
        }

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("print-advisor/", env!("CARGO_PKG_VERSION"))),
        );

        Ok(headers)
    }

    async fn send_request(
        &self,
        api_key: &str,
        endpoint: &str,
        body: Value,
    ) -> Result<Response, ProviderError> {
        let url = self.config.get_api_url(endpoint);
        let headers = self.build_headers(api_key)?;
        let deadline = Duration::from_secs(self.config.request_timeout);

        debug!(url = %url, "Sending request to Anthropic");

        timeout(
            deadline,
            self.http_client
                .post(&url)
                .headers(headers)
                .json(&body)
                .send(),
        )
        .await
        .map_err(|_| {
            ProviderError::timeout(
                PROVIDER_NAME,
                format!("no response within {} seconds", deadline.as_secs()),
            )
        })?
        .map_err(|e| {
            if e.is_timeout() {
                ProviderError::timeout(PROVIDER_NAME, e.to_string())
            } else {
                ProviderError::network(PROVIDER_NAME, e.to_string())
            }
        })
    }

    async fn handle_response(response: Response) -> Result<GenerationResponse, ProviderError> {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        let response_text = response.text().await.map_err(|e| {
            ProviderError::network(PROVIDER_NAME, format!("Failed to read response: {}", e))
        })?;

        if !(200..300).contains(&status) {
            return Err(Self::map_http_error(status, retry_after, &response_text));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::serialization(PROVIDER_NAME, format!("Failed to parse JSON: {}", e))
        })
    }

    /// Map a non-success status onto the provider error taxonomy
    pub(crate) fn map_http_error(
        status: u16,
        retry_after: Option<u64>,
        body: &str,
    ) -> ProviderError {
        match status {
            401 | 403 => ProviderError::authentication(
                PROVIDER_NAME,
                Self::extract_error_message(body)
                    .unwrap_or_else(|| "Invalid or missing API key".to_string()),
            ),
            429 => ProviderError::rate_limit(
                PROVIDER_NAME,
                retry_after.or_else(|| Self::extract_retry_after(body)),
            ),
            _ => ProviderError::api_error(
                PROVIDER_NAME,
                status,
                Self::extract_error_message(body).unwrap_or_else(|| format!("HTTP {}", status)),
            ),
        }
    }

    /// Pull `error.message` out of an Anthropic error body
    fn extract_error_message(body: &str) -> Option<String> {
        let json = serde_json::from_str::<Value>(body).ok()?;
        json.get("error")
            .and_then(|error| error.get("message"))
            .or_else(|| json.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn extract_retry_after(body: &str) -> Option<u64> {
        let json = serde_json::from_str::<Value>(body).ok()?;
        json.get("retry_after")
            .or_else(|| json.get("error").and_then(|error| error.get("retry_after")))
            .and_then(Value::as_u64)
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn is_configured(&self) -> bool {
        self.config.api_key().is_some()
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ProviderError::not_configured(PROVIDER_NAME))?;

        let body = Self::transform_request(&request);
        let response = self.send_request(api_key, MESSAGES_ENDPOINT, body).await?;

        let result = Self::handle_response(response).await;
        if let Err(ref e) = result {
            warn!(error = %e, model = %request.model, "Anthropic request failed");
        }
        result
    }
}

//! Anthropic Configuration

use serde::{Deserialize, Serialize};

use super::{DEFAULT_API_VERSION, DEFAULT_BASE_URL};

/// Connection settings for the Anthropic Messages API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// API key. Absent means the analysis endpoint reports "not configured".
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `anthropic-version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Whole-request deadline in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Connect deadline in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// Proxy URL (optional)
    #[serde(default)]
    pub proxy_url: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: default_api_version(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            proxy_url: None,
        }
    }
}

impl AnthropicConfig {
    /// Create a configuration with the given key and defaults elsewhere
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Apply `ANTHROPIC_*` overrides using the given variable lookup.
    ///
    /// Unparseable timeouts keep the current value.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("ANTHROPIC_API_KEY").or_else(|| lookup("CLAUDE_API_KEY")) {
            self.api_key = Some(api_key);
        }

        if let Some(base_url) = lookup("ANTHROPIC_BASE_URL") {
            self.base_url = base_url;
        }

        if let Some(api_version) = lookup("ANTHROPIC_API_VERSION") {
            self.api_version = api_version;
        }

        if let Some(timeout) = lookup("ANTHROPIC_TIMEOUT") {
            self.request_timeout = timeout.parse().unwrap_or(self.request_timeout);
        }

        if let Some(proxy) = lookup("ANTHROPIC_PROXY") {
            self.proxy_url = Some(proxy);
        }
    }

    /// Point the client at another API host, such as a local mock
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request deadline in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The key, if one is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Full URL for an API path
    pub fn get_api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Validate settings that would make every request fail
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Anthropic base URL cannot be empty".to_string());
        }
        if self.request_timeout == 0 {
            return Err("Anthropic request timeout cannot be 0".to_string());
        }
        if self.connect_timeout == 0 {
            return Err("Anthropic connect timeout cannot be 0".to_string());
        }
        Ok(())
    }
}

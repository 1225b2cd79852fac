//! Anthropic Provider Implementation
//!
//! Messages API client used to generate print assessments.

pub mod client;
pub mod config;

pub use client::AnthropicClient;
pub use config::AnthropicConfig;

pub const PROVIDER_NAME: &str = "anthropic";

/// API constants
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 4_096;

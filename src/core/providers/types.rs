//! Request and response shapes shared by text generation providers

use serde::{Deserialize, Serialize};

/// A single-turn generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier understood by the provider
    pub model: String,
    /// Upper bound on output tokens
    pub max_tokens: u32,
    /// System instruction
    pub system: String,
    /// The one user message
    pub user: String,
}

/// Content block returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    /// Tool use, thinking, images and anything else without plain text
    #[serde(other)]
    Other,
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

/// Provider reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl GenerationResponse {
    /// Convenience constructor for a reply made of one text block
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
            ..Default::default()
        }
    }

    /// Text of the first text-typed content block, if any
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
    }
}

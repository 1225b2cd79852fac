//! Provider test utilities

use async_trait::async_trait;
use print_advisor::core::providers::{
    ContentBlock, GenerationRequest, GenerationResponse, ProviderError, TextGenerator,
};
use std::sync::{Arc, Mutex};

/// Generator that replays one canned outcome and records every request
pub struct ScriptedGenerator {
    configured: bool,
    outcome: Result<GenerationResponse, ProviderError>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    /// Reply with a single text block
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with_outcome(Ok(GenerationResponse::from_text(text)))
    }

    /// Reply with content that holds no text block
    pub fn replying_without_text() -> Arc<Self> {
        Self::with_outcome(Ok(GenerationResponse {
            content: vec![ContentBlock::Other],
            ..Default::default()
        }))
    }

    /// Fail every call with the given error
    pub fn failing(error: ProviderError) -> Arc<Self> {
        Self::with_outcome(Err(error))
    }

    /// Behave like a client with no credential
    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            outcome: Err(ProviderError::not_configured("scripted")),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn with_outcome(outcome: Result<GenerationResponse, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            outcome,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Number of generation attempts made
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        self.outcome.clone()
    }
}

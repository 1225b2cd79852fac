//! Text generation providers
//!
//! The analysis pipeline talks to the outside world through the
//! [`TextGenerator`] trait. The process bootstrap builds one concrete client
//! and hands it to the service, so tests can swap in their own.

pub mod anthropic;
mod error;
mod types;

pub use error::ProviderError;
pub use types::{ContentBlock, GenerationRequest, GenerationResponse, Usage};

use async_trait::async_trait;

/// A service that turns a prompt into model output
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name used in logs and errors
    fn name(&self) -> &'static str;

    /// Whether a credential is available
    fn is_configured(&self) -> bool;

    /// Make exactly one generation attempt
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError>;
}

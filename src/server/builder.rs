//! Server builder and run_server function
//!
//! Wires the catalog, the Anthropic client and the assessment service into
//! [`AppState`].

use crate::config::Config;
use crate::core::catalog::ProductCatalog;
use crate::core::providers::TextGenerator;
use crate::core::providers::anthropic::AnthropicClient;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::services::AssessmentService;
use crate::utils::error::{AdvisorError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    catalog: Option<ProductCatalog>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this catalog instead of loading one
    pub fn with_catalog(mut self, catalog: ProductCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use this generator instead of the Anthropic client
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Assemble shared application state
    pub async fn build_state(self) -> Result<AppState> {
        let config = self
            .config
            .ok_or_else(|| AdvisorError::config("Configuration is required"))?;

        let catalog = match (self.catalog, &config.analysis.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => ProductCatalog::from_file(path).await?,
            (None, None) => ProductCatalog::builtin()?,
        };
        info!("Product catalog ready with {} products", catalog.len());

        let generator: Arc<dyn TextGenerator> = match self.generator {
            Some(generator) => generator,
            None => Arc::new(
                AnthropicClient::new(config.anthropic.clone())
                    .map_err(|e| AdvisorError::config(e.to_string()))?,
            ),
        };

        let service =
            AssessmentService::new(Arc::new(catalog), generator, config.analysis.clone());
        Ok(AppState::new(config, service))
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        Ok(HttpServer::new(self.build_state().await?))
    }
}

/// Build and run the server for a loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting print advisor v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/analyze - Print assessment analysis");
    info!("   GET  /api/products - Product catalog");
    info!("   GET  /api/products/{{id}} - Single product");

    server.start().await
}

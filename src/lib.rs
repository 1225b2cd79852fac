//! # Print Advisor
//!
//! Turns a completed print-assessment wizard into an equipment analysis.
//!
//! A request carries five intake sections. They are validated, rendered into
//! a prompt that embeds the product catalog, and sent to the Anthropic
//! Messages API. The model's JSON reply is recovered from any markdown
//! fencing, checked for shape, and every recommended product id is replaced
//! by its full catalog record.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use print_advisor::{Config, ServerBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let state = ServerBuilder::new().with_config(config).build_state().await?;
//!
//!     let intake = serde_json::json!({ "businessProfile": null });
//!     match state.service.analyze(&intake).await {
//!         Ok(analysis) => println!("{}", analysis.summary),
//!         Err(e) => println!("{}", e.client_message()),
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::analysis::{AnalysisResult, ProductRecommendation};
pub use core::catalog::{ProductCatalog, ProductCatalogEntry};
pub use core::intake::{AnalyzeRequest, validate_intake};
pub use core::providers::{ProviderError, TextGenerator};
pub use server::{AppState, HttpServer, ServerBuilder};
pub use services::AssessmentService;
pub use utils::error::{AdvisorError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information stamped by the build script
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl BuildInfo {
    /// Information for the running binary
    pub fn current() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Version, build time, git hash and compiler of the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::current()
}

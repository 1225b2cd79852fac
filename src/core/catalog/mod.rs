//! Static product catalog
//!
//! Loaded once at startup and shared read-only between requests.

mod models;

pub use models::{PaperFormat, ProductCatalogEntry, UNKNOWN_PRODUCT_NAME};

use crate::utils::error::{AdvisorError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("../../../data/products.json");

/// Read-only product table keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    entries: Vec<ProductCatalogEntry>,
    index: HashMap<String, usize>,
}

impl ProductCatalog {
    /// Build a catalog, rejecting blank or duplicate identifiers
    pub fn from_entries(entries: Vec<ProductCatalogEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            entry.validate().map_err(AdvisorError::Config)?;
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(AdvisorError::config(format!(
                    "Duplicate product id in catalog: {}",
                    entry.id
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Parse a catalog from its JSON array form
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ProductCatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json(BUILTIN_CATALOG)?;
        debug!("Loaded built-in catalog with {} products", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading product catalog from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AdvisorError::config(format!("Failed to read catalog file {:?}: {}", path, e))
        })?;

        Self::from_json(&content)
    }

    /// Look up a product by identifier
    pub fn get(&self, id: &str) -> Option<&ProductCatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// All products, in table order
    pub fn entries(&self) -> &[ProductCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

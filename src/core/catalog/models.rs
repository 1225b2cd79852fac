//! Product catalog records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest paper size a device handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperFormat {
    A3,
    A4,
}

impl fmt::Display for PaperFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperFormat::A3 => write!(f, "A3"),
            PaperFormat::A4 => write!(f, "A4"),
        }
    }
}

/// A sellable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCatalogEntry {
    /// Stable identifier referenced by the model as `productId`
    pub id: String,
    /// Display name
    pub name: String,
    pub brand: String,
    pub model: String,
    pub format: PaperFormat,
    /// Whether the device prints colour
    pub colour: bool,
    /// Pages per minute
    pub speed: u32,
    /// Recommended monthly volume range, pages
    pub monthly_volume_min: u64,
    pub monthly_volume_max: u64,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Display name used for identifiers the catalog does not know
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

impl ProductCatalogEntry {
    /// Catalog-shaped stand-in for an unresolved identifier.
    ///
    /// Identifier and model echo the requested id; numbers are zero and text
    /// is empty.
    pub fn placeholder(product_id: &str) -> Self {
        Self {
            id: product_id.to_string(),
            name: UNKNOWN_PRODUCT_NAME.to_string(),
            brand: String::new(),
            model: product_id.to_string(),
            format: PaperFormat::A4,
            colour: false,
            speed: 0,
            monthly_volume_min: 0,
            monthly_volume_max: 0,
            description: String::new(),
            features: Vec::new(),
        }
    }

    /// One-line summary used when listing the catalog to the model
    pub fn headline(&self) -> String {
        format!(
            "{} | {} | {} {} | {} ppm | {}-{} pages/month",
            self.id,
            self.name,
            self.format,
            if self.colour { "colour" } else { "mono" },
            self.speed,
            self.monthly_volume_min,
            self.monthly_volume_max
        )
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Product id cannot be empty".to_string());
        }
        if self.monthly_volume_min > self.monthly_volume_max {
            return Err(format!(
                "Product {} has monthlyVolumeMin greater than monthlyVolumeMax",
                self.id
            ));
        }
        Ok(())
    }
}

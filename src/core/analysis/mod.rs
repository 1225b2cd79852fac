//! Analysis response handling
//!
//! Model text goes through three steps: JSON recovery from optional markdown
//! fencing, structural validation into [`AnalysisPayload`], and hydration of
//! product ids into full catalog records.

mod extract;
mod hydrate;
mod payload;

pub use extract::{extract_json, fenced_block};
pub use hydrate::{AnalysisResult, ProductRecommendation, hydrate};
pub use payload::{AnalysisPayload, RecommendationPayload};

use crate::utils::error::Result;
use crate::utils::truncate_string;
use tracing::error;

const MAX_LOGGED_RESPONSE_CHARS: usize = 4_000;

/// Recover and validate the analysis object from raw model text.
///
/// On failure the raw text is logged here and never travels further.
pub fn parse_analysis(text: &str) -> Result<AnalysisPayload> {
    extract_json(text)
        .and_then(AnalysisPayload::from_value)
        .inspect_err(|e| {
            error!(
                error = %e,
                raw_response = %truncate_string(text, MAX_LOGGED_RESPONSE_CHARS),
                "Could not parse analysis from model output"
            );
        })
}

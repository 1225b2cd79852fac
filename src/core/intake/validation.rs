//! Intake validation
//!
//! Presence of the five sections is checked first, on the untyped payload.
//! Only then is each section decoded and held to its step-level rules.

use super::types::*;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{Validate, check_length, check_optional_length};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Wire names of the sections every request must carry
pub const REQUIRED_SECTIONS: [&str; 5] = [
    "businessProfile",
    "currentSetup",
    "printVolume",
    "workflowNeeds",
    "budgetTimeline",
];

const MAX_NAME_LENGTH: usize = 200;
const MAX_NOTES_LENGTH: usize = 2_000;
const MAX_BRANDS: usize = 20;
const MAX_LOCATIONS: u32 = 500;
const MAX_PRINTERS: u32 = 10_000;

/// Turn a raw request body into a validated [`AnalyzeRequest`]
pub fn validate_intake(payload: &Value) -> Result<AnalyzeRequest> {
    let missing = missing_sections(payload);
    if !missing.is_empty() {
        return Err(AdvisorError::MissingFields(missing));
    }

    let request = AnalyzeRequest {
        business_profile: decode_section(payload, "businessProfile")?,
        current_setup: decode_section(payload, "currentSetup")?,
        print_volume: decode_section(payload, "printVolume")?,
        workflow_needs: decode_section(payload, "workflowNeeds")?,
        budget_timeline: decode_section(payload, "budgetTimeline")?,
    };

    request.validate().map_err(AdvisorError::InvalidIntake)?;
    Ok(request)
}

/// Sections that are absent or null, in declaration order
pub fn missing_sections(payload: &Value) -> Vec<&'static str> {
    REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| payload.get(section).is_none_or(Value::is_null))
        .collect()
}

fn decode_section<T: DeserializeOwned>(payload: &Value, section: &str) -> Result<T> {
    let value = payload.get(section).cloned().unwrap_or(Value::Null);
    serde_json::from_value(value)
        .map_err(|e| AdvisorError::invalid_intake(format!("{}: {}", section, e)))
}

impl Validate for BusinessProfile {
    fn validate(&self) -> std::result::Result<(), String> {
        check_optional_length(
            "businessProfile.companyName",
            self.company_name.as_deref(),
            MAX_NAME_LENGTH,
        )?;
        check_optional_length(
            "businessProfile.additionalContext",
            self.additional_context.as_deref(),
            MAX_NOTES_LENGTH,
        )?;

        if self.locations == 0 {
            return Err("businessProfile.locations must be at least 1".to_string());
        }
        if self.locations > MAX_LOCATIONS {
            return Err(format!(
                "businessProfile.locations cannot exceed {}",
                MAX_LOCATIONS
            ));
        }
        Ok(())
    }
}

impl Validate for CurrentSetup {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.printer_count > MAX_PRINTERS {
            return Err(format!(
                "currentSetup.printerCount cannot exceed {}",
                MAX_PRINTERS
            ));
        }
        if self.current_brands.len() > MAX_BRANDS {
            return Err(format!(
                "currentSetup.currentBrands cannot list more than {} brands",
                MAX_BRANDS
            ));
        }
        for brand in &self.current_brands {
            if brand.trim().is_empty() {
                return Err("currentSetup.currentBrands cannot contain blank entries".to_string());
            }
            check_length("currentSetup.currentBrands", brand, MAX_NAME_LENGTH)?;
        }
        check_optional_length("currentSetup.notes", self.notes.as_deref(), MAX_NOTES_LENGTH)
    }
}

impl Validate for PrintVolume {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(total) = self.total {
            if self.colour > total {
                return Err(format!(
                    "printVolume.colour ({}) cannot exceed printVolume.total ({})",
                    self.colour, total
                ));
            }
            if self.mono > total {
                return Err(format!(
                    "printVolume.mono ({}) cannot exceed printVolume.total ({})",
                    self.mono, total
                ));
            }
        }

        if let Some(share) = self.a3_percentage {
            if share > 100 {
                return Err("printVolume.a3Percentage must be between 0 and 100".to_string());
            }
        }
        Ok(())
    }
}

impl Validate for AnalyzeRequest {
    fn validate(&self) -> std::result::Result<(), String> {
        self.business_profile.validate()?;
        self.current_setup.validate()?;
        self.print_volume.validate()?;
        Ok(())
    }
}

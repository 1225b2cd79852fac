//! Assessment intake
//!
//! Typed form of the five wizard sections and the validator that produces it
//! from an untyped request body.

mod types;
mod validation;

pub use types::{
    AcquisitionPreference, AnalyzeRequest, BudgetRange, BudgetTimeline, BusinessProfile,
    Capability, CurrentSetup, EquipmentAge, Industry, OrganisationSize, Ownership, PainPoint,
    PrintVolume, Timeline, WorkflowNeeds,
};
pub use validation::{REQUIRED_SECTIONS, missing_sections, validate_intake};

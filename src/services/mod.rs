//! Services module
//!
//! This module contains business logic and service implementations

pub mod assessment;

pub use assessment::AssessmentService;

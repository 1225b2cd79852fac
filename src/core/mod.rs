//! Core assessment pipeline
//!
//! Intake validation, prompt construction, the external text generator and
//! the handling of its reply.

pub mod analysis;
pub mod catalog;
pub mod intake;
pub mod prompt;
pub mod providers;

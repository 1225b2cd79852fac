//! Error handling for the advisor service
//!
//! This module defines the error taxonomy surfaced to HTTP clients and the
//! conversions from lower-level failures.

mod conversions;
mod helpers;
mod response;
mod types;

pub use types::{AdvisorError, Result};

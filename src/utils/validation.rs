//! Validation trait definition
//!
//! Shared by configuration structures and assessment intake sections.

/// Validation trait for structures with invariants serde cannot express
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Reject text longer than `max` characters
pub fn check_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    let length = value.chars().count();
    if length > max {
        return Err(format!(
            "{} must be at most {} characters (got {})",
            field, max, length
        ));
    }
    Ok(())
}

/// [`check_length`] for optional text
pub fn check_optional_length(field: &str, value: Option<&str>, max: usize) -> Result<(), String> {
    match value {
        Some(value) => check_length(field, value, max),
        None => Ok(()),
    }
}

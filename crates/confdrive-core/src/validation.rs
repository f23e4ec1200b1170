//! Validation trait for driver options

use crate::error::{ConfigError, Result};

/// Trait for validating option values beyond type-level checks
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what failed.
    fn validate(&self) -> Result<()>;
}

/// Helper function to validate an integer option is within an inclusive range
pub fn validate_range(
    field: impl Into<String>,
    value: usize,
    min: usize,
    max: usize,
) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::ValidationError {
            field: field.into(),
            message: format!("must be between {} and {}, got {}", min, max, value),
        });
    }
    Ok(())
}

//! Input guards for scalar attributes.

use crate::error::{ProviderError, Result};

/// Names and titles must be non-empty and contain no whitespace.
pub fn validate_name(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ProviderError::InvalidAttribute {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ProviderError::InvalidAttribute {
            field,
            reason: format!("string value cannot contain whitespace, got {:?}", value),
        });
    }
    Ok(())
}

/// Required free-form strings must be non-empty.
pub fn validate_required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProviderError::InvalidAttribute {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Rates must be finite and not negative.
pub fn validate_rate(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProviderError::InvalidAttribute {
            field,
            reason: format!("should be a positive value, got {}", value),
        });
    }
    Ok(())
}

// src/domain/text.rs
//
// Shared string rules used by every entity constructor.

use crate::domain::{DomainResult, ValidationError};

/// Returns the trimmed value, or a `Required` violation when nothing is left.
///
/// `label` is the human-readable name used in the message ("First name").
pub fn require_text(field: &'static str, label: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(
            field,
            format!("{} cannot be empty or whitespace.", label),
        ));
    }
    Ok(trimmed.to_string())
}

/// Checks a stored value is non-blank and already trimmed
pub fn ensure_trimmed(field: &'static str, label: &str, value: &str) -> DomainResult<()> {
    let trimmed = require_text(field, label, value)?;
    if trimmed != value {
        return Err(ValidationError::format(
            field,
            format!("{} must not carry surrounding whitespace.", label),
        ));
    }
    Ok(())
}

//! Common validation helpers for use cases.
//!
//! Stores accept anything; these checks run before a record reaches them.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} is required")]
    Missing { field_name: &'static str },

    #[error("{field_name} is invalid: {reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate an optional value was provided.
pub fn require_present<T>(
    value: Option<T>,
    field_name: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field_name })
}

/// Validate a count is greater than zero.
pub fn require_positive(value: u32, field_name: &'static str) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::Invalid {
            field_name,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

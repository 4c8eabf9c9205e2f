//! Validation utilities.

use crate::{CouponError, FieldErrors};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `CouponError` on failure.
    fn validate_request(&self) -> Result<(), CouponError> {
        self.validate().map_err(validation_errors_to_coupon_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a field-keyed `CouponError`.
///
/// Only the first message reported for each field is kept.
#[must_use]
pub fn validation_errors_to_coupon_error(errors: ValidationErrors) -> CouponError {
    CouponError::invalid_fields(first_error_per_field(&errors))
}

/// Flattens `validator::ValidationErrors` into one message per field.
///
/// Field names are reported in camelCase to match the JSON payloads.
#[must_use]
pub fn first_error_per_field(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                (to_camel_case(field), message)
            })
        })
        .collect()
}

/// Converts a snake_case field name to camelCase.
#[must_use]
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

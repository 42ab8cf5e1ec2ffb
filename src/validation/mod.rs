//! Ad field validation rules.
//!
//! The form layer owns validation; the coordinator assumes pre-validated
//! input. The rules live here anyway so the client and its tests agree on
//! one definition of "valid".

use crate::error::FieldError;
use crate::model::AdFields;

pub const TITLE_MIN_LEN: usize = 5;
pub const DESCRIPTION_MIN_LEN: usize = 20;

/// Check all create/update rules, collecting every violation rather than
/// stopping at the first.
pub fn validate_ad_fields(fields: &AdFields) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if fields.title.trim().is_empty() {
        errors.push(FieldError::new("title", "title is required"));
    } else if fields.title.chars().count() < TITLE_MIN_LEN {
        errors.push(FieldError::new(
            "title",
            format!("title must be at least {} characters", TITLE_MIN_LEN),
        ));
    }

    if fields.description.trim().is_empty() {
        errors.push(FieldError::new("description", "description is required"));
    } else if fields.description.chars().count() < DESCRIPTION_MIN_LEN {
        errors.push(FieldError::new(
            "description",
            format!(
                "description must be at least {} characters",
                DESCRIPTION_MIN_LEN
            ),
        ));
    }

    if !fields.price.is_finite() {
        errors.push(FieldError::new("price", "price must be a number"));
    } else if fields.price < 0.0 {
        errors.push(FieldError::new("price", "price cannot be negative"));
    }

    if fields.location.trim().is_empty() {
        errors.push(FieldError::new("location", "location is required"));
    }

    if fields.category.trim().is_empty() {
        errors.push(FieldError::new("category", "category is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

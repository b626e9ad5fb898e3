//! Marketplace domain records and their input boundary.
//!
//! # Responsibility
//! - Define the canonical record shapes for both collections.
//! - Separate pre-persistence drafts from store-identified records.
//! - Own required-field and numeric-input validation for form submissions.
//!
//! # Invariants
//! - A retrieved record always carries a valid store-assigned id.
//! - Draft types carry no identity at all; the store gateway mints it.
//! - Validation runs at this boundary, never inside the store gateway.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod freelancer;
pub mod project;

/// Rejection reasons for caller-supplied record input.
///
/// Recoverable per-operation: the attempted mutation is abandoned with state
/// unchanged, and the caller may retry with corrected input.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field was submitted empty.
    EmptyField(&'static str),
    /// A monetary field was submitted with a negative value.
    NegativeAmount { field: &'static str, value: f64 },
    /// A numeric form field could not be parsed as a number.
    NotANumber { field: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::NegativeAmount { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::NotANumber { field, value } => {
                write!(f, "{field} must be a number, got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Parses a free-text numeric form field.
pub(crate) fn parse_amount(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_amount, ValidationError};

    #[test]
    fn parse_amount_accepts_plain_and_padded_numbers() {
        assert_eq!(parse_amount("rate_per_hour", "45.5").unwrap(), 45.5);
        assert_eq!(parse_amount("budget", " 500 ").unwrap(), 500.0);
    }

    #[test]
    fn parse_amount_rejects_non_numeric_input() {
        let err = parse_amount("rating", "five").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: "rating",
                value: "five".to_string(),
            }
        );
    }
}

//! Freelancer record and registration draft.
//!
//! # Responsibility
//! - Define the retrieved freelancer record with its store-assigned id.
//! - Define the identity-less draft used for registration submissions.
//! - Parse and validate free-text registration form input.
//!
//! # Invariants
//! - `rate_per_hour` is never negative on a validated draft.
//! - `rating` is an open range; no 0-5 bound is enforced.

use crate::model::{parse_amount, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable store-assigned identifier for a freelancer record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FreelancerId = Uuid;

/// A freelancer as retrieved from the store.
///
/// Only the store gateway constructs this type; its `id` is always a valid
/// identity minted at persistence time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freelancer {
    /// Serialized as `_id` to match the persisted document schema.
    #[serde(rename = "_id")]
    pub id: FreelancerId,
    pub name: String,
    pub skill: String,
    pub rate_per_hour: f64,
    pub rating: f64,
}

impl Freelancer {
    /// Renders the detail column shown next to a list row.
    pub fn detail_line(&self) -> String {
        format!("${:.2}/hr | {:.1} stars", self.rate_per_hour, self.rating)
    }
}

impl Display for Freelancer {
    /// One-line list rendering: `name (skill)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.skill)
    }
}

/// Registration payload before persistence.
///
/// Carries no identity; the store gateway assigns one on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerDraft {
    pub name: String,
    pub skill: String,
    pub rate_per_hour: f64,
    pub rating: f64,
}

impl FreelancerDraft {
    /// Creates a draft from already-typed values.
    ///
    /// Does not validate; call [`FreelancerDraft::validate`] or go through
    /// the service registration entry point.
    pub fn new(
        name: impl Into<String>,
        skill: impl Into<String>,
        rate_per_hour: f64,
        rating: f64,
    ) -> Self {
        Self {
            name: name.into(),
            skill: skill.into(),
            rate_per_hour,
            rating,
        }
    }

    /// Builds a validated draft from free-text registration form fields.
    ///
    /// # Errors
    /// - [`ValidationError::NotANumber`] when rate or rating fail to parse.
    /// - [`ValidationError::EmptyField`] when name or skill are empty.
    /// - [`ValidationError::NegativeAmount`] when the rate is negative.
    pub fn from_form(
        name: &str,
        skill: &str,
        rate_per_hour: &str,
        rating: &str,
    ) -> Result<Self, ValidationError> {
        let rate = parse_amount("rate_per_hour", rate_per_hour)?;
        let rating = parse_amount("rating", rating)?;

        let draft = Self::new(name, skill, rate, rating);
        draft.validate()?;
        Ok(draft)
    }

    /// Checks the required-field and numeric constraints.
    ///
    /// The rating is deliberately left unbounded.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.skill.is_empty() {
            return Err(ValidationError::EmptyField("skill"));
        }
        if self.rate_per_hour < 0.0 {
            return Err(ValidationError::NegativeAmount {
                field: "rate_per_hour",
                value: self.rate_per_hour,
            });
        }
        Ok(())
    }
}

impl Default for FreelancerDraft {
    /// Mirrors the registration form defaults: empty text, zero rate,
    /// initial rating 5.0.
    fn default() -> Self {
        Self::new("", "", 0.0, 5.0)
    }
}

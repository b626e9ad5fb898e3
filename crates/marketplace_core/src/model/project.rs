//! Project record and posting draft.

use crate::model::{parse_amount, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable store-assigned identifier for a project record.
pub type ProjectId = Uuid;

/// A posted project as retrieved from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Serialized as `_id` to match the persisted document schema.
    #[serde(rename = "_id")]
    pub id: ProjectId,
    pub title: String,
    /// May be empty; a project does not require a description.
    pub description: String,
    pub budget: f64,
    pub company_name: String,
}

impl Project {
    /// Renders the detail column shown next to a list row.
    pub fn detail_line(&self) -> String {
        format!("Budget: ${:.2}", self.budget)
    }
}

impl Display for Project {
    /// One-line list rendering: `title (company)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.company_name)
    }
}

/// Posting payload before persistence; no identity until inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub company_name: String,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        budget: f64,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            budget,
            company_name: company_name.into(),
        }
    }

    /// Builds a validated draft from free-text posting form fields.
    ///
    /// # Errors
    /// - [`ValidationError::NotANumber`] when the budget fails to parse.
    /// - [`ValidationError::EmptyField`] when title or company are empty.
    /// - [`ValidationError::NegativeAmount`] when the budget is negative.
    pub fn from_form(
        title: &str,
        description: &str,
        budget: &str,
        company_name: &str,
    ) -> Result<Self, ValidationError> {
        let budget = parse_amount("budget", budget)?;

        let draft = Self::new(title, description, budget, company_name);
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.company_name.is_empty() {
            return Err(ValidationError::EmptyField("company_name"));
        }
        if self.budget < 0.0 {
            return Err(ValidationError::NegativeAmount {
                field: "budget",
                value: self.budget,
            });
        }
        Ok(())
    }
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self::new("", "", 0.0, "")
    }
}

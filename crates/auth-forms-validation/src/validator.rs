//! Field and form validation over the rule catalog
//!
//! Pure functions: the same input always yields the same result, and nothing
//! outside the returned value is touched. Rendering the result is left to the caller.

use serde::{Deserialize, Serialize};

use crate::catalog::{FieldId, RuleCatalog};
use crate::error::ValidationError;

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub field_id: FieldId,
    pub valid: bool,
    /// Message of the first failing rule, empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn success(field_id: FieldId) -> Self {
        Self {
            field_id,
            valid: true,
            message: String::new(),
        }
    }

    pub fn failure(field_id: FieldId, message: impl Into<String>) -> Self {
        Self {
            field_id,
            valid: false,
            message: message.into(),
        }
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        (!self.valid).then_some(self.message.as_str())
    }
}

/// Outcome of validating every registered field of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationResult {
    pub all_valid: bool,
    pub per_field: Vec<ValidationResult>,
}

impl FormValidationResult {
    /// Result for a specific field, if it was evaluated
    pub fn get(&self, field_id: FieldId) -> Option<&ValidationResult> {
        self.per_field.iter().find(|r| r.field_id == field_id)
    }

    /// Failing results only, in form order
    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.per_field.iter().filter(|r| !r.valid)
    }
}

/// Validate one field, reporting the first rule it fails
///
/// # Examples
/// ```
/// use auth_forms_validation::{validate_field, FieldId};
/// let result = validate_field(FieldId::Password, "password1");
/// assert!(!result.valid);
/// assert_eq!(result.message, "It must contain at least one special character");
/// ```
pub fn validate_field(field_id: FieldId, value: &str) -> ValidationResult {
    let result = match RuleCatalog::rules_for(field_id, value).first_failure() {
        Some(rule) => ValidationResult::failure(field_id, rule.message),
        None => ValidationResult::success(field_id),
    };
    tracing::debug!(field = %field_id, valid = result.valid, "validated field");
    result
}

/// Validate a field addressed by its input id
pub fn validate_named_field(id: &str, value: &str) -> Result<ValidationResult, ValidationError> {
    let field_id: FieldId = id.parse()?;
    Ok(validate_field(field_id, value))
}

/// Validate a form given as ordered `(input id, value)` pairs
///
/// Inputs whose id is not in the catalog are skipped: they are neither
/// validated nor reported. A form without registered inputs is valid.
pub fn validate_form<'a, I>(fields: I) -> FormValidationResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let per_field: Vec<ValidationResult> = fields
        .into_iter()
        .filter_map(|(id, value)| RuleCatalog::lookup(id).map(|field_id| (field_id, value)))
        .map(|(field_id, value)| validate_field(field_id, value))
        .collect();

    let all_valid = per_field.iter().all(|r| r.valid);
    tracing::debug!(fields = per_field.len(), all_valid, "validated form");

    FormValidationResult {
        all_valid,
        per_field,
    }
}

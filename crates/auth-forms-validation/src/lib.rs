//! Auth-Forms-Validation Core
//!
//! Declarative, first-failure-wins validation for the login and registration
//! fields. Used directly by the presentation layer and through the WASM bindings
//! for client-side validation.

pub mod catalog;
pub mod error;
pub mod validator;

pub use catalog::{
    FieldId, FieldRules, Rule, RuleCatalog, PASSWORD_MIN_LENGTH, PASSWORD_SPECIAL_CHARACTERS,
    USERNAME_MIN_LENGTH,
};
pub use error::ValidationError;
pub use validator::{
    validate_field, validate_form, validate_named_field, FormValidationResult, ValidationResult,
};

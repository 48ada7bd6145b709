// Auth Forms - login/registration form state
// Drives the validation core from UI events; rendering stays with the caller

pub mod config;
pub mod controller;
pub mod screen;
pub mod visibility;

// Re-export form state types
pub use config::{BehaviorConfig, Config, FormConfig};
pub use controller::{
    FormController, FormInput, RecordingSink, RenderSink, SubmissionState, SubmitOutcome,
};
pub use screen::{AuthPanel, AuthScreen, LOGIN_FORM, REGISTRATION_FORM};
pub use visibility::PasswordVisibility;

// Re-export the validation core
pub use auth_forms_validation as validation;
pub use auth_forms_validation::{FieldId, FormValidationResult, ValidationResult};

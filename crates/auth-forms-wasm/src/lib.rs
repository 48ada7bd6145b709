//! Auth Forms WASM
//!
//! WebAssembly bindings for the login/registration validation.
//! The page script forwards DOM events here and renders the returned results.

use auth_forms::validation;
use auth_forms::{
    AuthPanel, AuthScreen, Config, FormController, PasswordVisibility, RecordingSink,
    SubmissionState, SubmitOutcome, ValidationResult,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// One `{ id, value }` entry of a form passed from JavaScript
#[derive(Serialize, Deserialize, Debug)]
pub struct FieldInput {
    pub id: String,
    pub value: String,
}

/// What a submit produced, in render order
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReport {
    pub accepted: bool,
    pub rendered: Vec<ValidationResult>,
}

/// Validate a single field by its input id
///
/// # Example (JavaScript)
/// ```javascript
/// const { valid, message } = validateField('email', 'user@example.com');
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_id: &str, value: &str) -> Result<JsValue, JsValue> {
    let result = validation::validate_named_field(field_id, value)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Validate a whole form given as `[{ id, value }, ...]`
///
/// Entries whose id has no rules are skipped.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(fields: JsValue) -> Result<JsValue, JsValue> {
    let fields: Vec<FieldInput> = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;

    let result = validation::validate_form(
        fields
            .iter()
            .map(|field| (field.id.as_str(), field.value.as_str())),
    );
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Quick check whether an input id has validation rules
#[wasm_bindgen(js_name = hasRules)]
pub fn has_rules(field_id: &str) -> bool {
    validation::RuleCatalog::contains(field_id)
}

/// Login and registration panels with their form state
#[wasm_bindgen]
pub struct AuthUi {
    screen: AuthScreen,
}

#[wasm_bindgen]
impl AuthUi {
    /// Build from optional `auth-forms.toml` text; defaults when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<AuthUi, JsValue> {
        let config = match config {
            Some(text) => Config::parse(&text).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?,
            None => Config::default(),
        };
        Ok(AuthUi {
            screen: AuthScreen::from_config(&config),
        })
    }

    #[wasm_bindgen(js_name = showRegister)]
    pub fn show_register(&mut self) {
        self.screen.show_register();
    }

    #[wasm_bindgen(js_name = showLogin)]
    pub fn show_login(&mut self) {
        self.screen.show_login();
    }

    /// Whether the container should carry the "active" class
    #[wasm_bindgen(js_name = containerActive)]
    pub fn container_active(&self) -> bool {
        self.screen.container_is_active()
    }

    #[wasm_bindgen(js_name = activePanel)]
    pub fn active_panel(&self) -> String {
        match self.screen.panel() {
            AuthPanel::Login => "login".to_string(),
            AuthPanel::Register => "register".to_string(),
        }
    }

    /// Input event on the named form (`"login"` or `"registration"`)
    ///
    /// Returns the result to render, or `null` when nothing was revalidated.
    pub fn input(&mut self, form: &str, id: &str, value: &str) -> Result<JsValue, JsValue> {
        let mut sink = RecordingSink::new();
        match self.form_mut(form)?.on_input(id, value, &mut sink) {
            Some(result) => Ok(serde_wasm_bindgen::to_value(&result)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// Submit event on the named form
    pub fn submit(&mut self, form: &str) -> Result<JsValue, JsValue> {
        let mut sink = RecordingSink::new();
        let form = self.form_mut(form)?;
        let outcome = form.on_submit(&mut sink);

        if let SubmitOutcome::Rejected(result) = &outcome {
            web_sys::console::debug_1(&JsValue::from_str(&format!(
                "{} rejected: {} invalid field(s)",
                form.name(),
                result.failures().count()
            )));
        }

        let report = SubmitReport {
            accepted: outcome.is_accepted(),
            rendered: sink.take(),
        };
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Clear the named form's values
    pub fn reset(&mut self, form: &str) -> Result<(), JsValue> {
        self.form_mut(form)?.reset();
        Ok(())
    }

    #[wasm_bindgen(js_name = isSubmitted)]
    pub fn is_submitted(&self, form: &str) -> Result<bool, JsValue> {
        let form = self
            .screen
            .form(form)
            .ok_or_else(|| unknown_form(form))?;
        Ok(form.state() == SubmissionState::Submitted)
    }
}

impl AuthUi {
    fn form_mut(&mut self, name: &str) -> Result<&mut FormController, JsValue> {
        self.screen.form_mut(name).ok_or_else(|| unknown_form(name))
    }
}

fn unknown_form(name: &str) -> JsValue {
    JsValue::from_str(&format!("Unknown form: {}", name))
}

/// Show/hide state for one password input
#[wasm_bindgen]
#[derive(Default)]
pub struct PasswordToggle {
    visibility: PasswordVisibility,
}

#[wasm_bindgen]
impl PasswordToggle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PasswordToggle {
        PasswordToggle::default()
    }

    /// Flip visibility and return the new input `type`
    pub fn toggle(&mut self) -> String {
        self.visibility.toggle();
        self.visibility.input_type().to_string()
    }

    #[wasm_bindgen(getter, js_name = inputType)]
    pub fn input_type(&self) -> String {
        self.visibility.input_type().to_string()
    }

    #[wasm_bindgen(getter, js_name = iconClass)]
    pub fn icon_class(&self) -> String {
        self.visibility.icon_class().to_string()
    }

    #[wasm_bindgen(getter, js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }
}

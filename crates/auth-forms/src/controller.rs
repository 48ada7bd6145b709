// File: src/controller.rs
// Purpose: Per-form submission state and live revalidation

use auth_forms_validation::{
    validate_field, validate_form, FormValidationResult, RuleCatalog, ValidationResult,
};

use crate::config::{BehaviorConfig, FormConfig};

/// Whether the form has seen a submit attempt since it was last accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    NotSubmitted,
    Submitted,
}

/// Destination for validation results: shows the message when invalid, clears it when valid
pub trait RenderSink {
    fn render(&mut self, result: &ValidationResult);
}

impl<F> RenderSink for F
where
    F: FnMut(&ValidationResult),
{
    fn render(&mut self, result: &ValidationResult) {
        self(result)
    }
}

/// Sink that keeps every rendered result in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    rendered: Vec<ValidationResult>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> &[ValidationResult] {
        &self.rendered
    }

    /// Drain the recorded results
    pub fn take(&mut self) -> Vec<ValidationResult> {
        std::mem::take(&mut self.rendered)
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, result: &ValidationResult) {
        self.rendered.push(result.clone());
    }
}

/// One input element of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every registered field passed; values have been cleared
    Accepted,
    Rejected(FormValidationResult),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Event handling for a single form
#[derive(Debug, Clone)]
pub struct FormController {
    name: String,
    inputs: Vec<FormInput>,
    state: SubmissionState,
    live_revalidation: bool,
}

impl FormController {
    /// Create a form with the given input ids, all empty
    pub fn new<I, S>(name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            inputs: ids
                .into_iter()
                .map(|id| FormInput {
                    id: id.into(),
                    value: String::new(),
                })
                .collect(),
            state: SubmissionState::NotSubmitted,
            live_revalidation: true,
        }
    }

    pub fn from_config(
        name: impl Into<String>,
        form: &FormConfig,
        behavior: &BehaviorConfig,
    ) -> Self {
        Self::new(name, form.fields.iter().cloned())
            .with_live_revalidation(behavior.live_revalidation)
    }

    pub fn with_live_revalidation(mut self, enabled: bool) -> Self {
        self.live_revalidation = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn inputs(&self) -> &[FormInput] {
        &self.inputs
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.inputs
            .iter()
            .find(|input| input.id == id)
            .map(|input| input.value.as_str())
    }

    /// Record an input change, revalidating the field once the form has been submitted
    ///
    /// Returns the rendered result, or `None` when nothing was revalidated.
    pub fn on_input<S>(
        &mut self,
        id: &str,
        value: impl Into<String>,
        sink: &mut S,
    ) -> Option<ValidationResult>
    where
        S: RenderSink + ?Sized,
    {
        let Some(input) = self.inputs.iter_mut().find(|input| input.id == id) else {
            tracing::debug!(form = %self.name, id, "input change for unknown input ignored");
            return None;
        };
        input.value = value.into();

        if self.state != SubmissionState::Submitted || !self.live_revalidation {
            return None;
        }

        let field_id = RuleCatalog::lookup(id)?;
        let result = validate_field(field_id, &input.value);
        sink.render(&result);
        Some(result)
    }

    /// Validate every registered input and render the results
    ///
    /// On success the values are cleared, the messages are cleared and the
    /// form returns to [`SubmissionState::NotSubmitted`].
    pub fn on_submit<S>(&mut self, sink: &mut S) -> SubmitOutcome
    where
        S: RenderSink + ?Sized,
    {
        self.state = SubmissionState::Submitted;

        let result = validate_form(
            self.inputs
                .iter()
                .map(|input| (input.id.as_str(), input.value.as_str())),
        );
        for field in &result.per_field {
            sink.render(field);
        }

        if !result.all_valid {
            tracing::debug!(
                form = %self.name,
                failures = result.failures().count(),
                "form submission rejected"
            );
            return SubmitOutcome::Rejected(result);
        }

        tracing::info!(form = %self.name, "form submitted successfully");
        self.reset();
        self.state = SubmissionState::NotSubmitted;
        for field_id in self.inputs.iter().filter_map(|input| RuleCatalog::lookup(&input.id)) {
            sink.render(&ValidationResult::success(field_id));
        }
        SubmitOutcome::Accepted
    }

    /// Clear every value; the submission state is left as is
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_forms_validation::FieldId;

    fn registration() -> FormController {
        FormController::new("registration", ["username", "email", "password"])
    }

    #[test]
    fn test_new_form_is_empty_and_not_submitted() {
        let form = registration();
        assert_eq!(form.state(), SubmissionState::NotSubmitted);
        assert_eq!(form.inputs().len(), 3);
        assert!(form.inputs().iter().all(|input| input.value.is_empty()));
    }

    #[test]
    fn test_unknown_input_is_ignored() {
        let mut form = registration();
        let mut sink = RecordingSink::new();
        assert_eq!(form.on_input("nickname", "bob", &mut sink), None);
        assert_eq!(form.value("nickname"), None);
    }

    #[test]
    fn test_reset_keeps_state() {
        let mut form = registration();
        let mut sink = RecordingSink::new();
        form.on_submit(&mut sink);
        form.on_input("username", "abc", &mut sink);
        form.reset();
        assert_eq!(form.value("username"), Some(""));
        assert_eq!(form.state(), SubmissionState::Submitted);
    }

    #[test]
    fn test_live_revalidation_disabled() {
        let mut form = registration().with_live_revalidation(false);
        let mut sink = RecordingSink::new();
        form.on_submit(&mut sink);
        sink.take();

        assert_eq!(form.on_input("username", "ab", &mut sink), None);
        assert!(sink.rendered().is_empty());
        assert_eq!(form.value("username"), Some("ab"));
    }

    #[test]
    fn test_closure_sink() {
        let mut form = registration();
        let mut seen = Vec::new();
        let outcome = form.on_submit(&mut |r: &ValidationResult| seen.push(r.field_id));
        assert!(!outcome.is_accepted());
        assert_eq!(seen, vec![FieldId::Username, FieldId::Email, FieldId::Password]);
    }
}

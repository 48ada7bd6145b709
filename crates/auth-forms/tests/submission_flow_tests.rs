//! Submit / live-revalidation flow across the login and registration forms

use auth_forms::{
    AuthScreen, Config, FieldId, FormController, RecordingSink, SubmissionState, SubmitOutcome,
    ValidationResult,
};
use pretty_assertions::assert_eq;
use std::fs;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn registration() -> FormController {
    FormController::new("registration", ["username", "email", "password", "terms"])
}

#[test]
fn input_before_first_submit_renders_nothing() {
    init_tracing();
    let mut form = registration();
    let mut sink = RecordingSink::new();

    assert_eq!(form.on_input("username", "ab", &mut sink), None);
    assert!(sink.rendered().is_empty());
    assert_eq!(form.state(), SubmissionState::NotSubmitted);
}

#[test]
fn failed_submit_enables_live_revalidation() {
    init_tracing();
    let mut form = registration();
    let mut sink = RecordingSink::new();

    form.on_input("username", "abc123", &mut sink);
    let outcome = form.on_submit(&mut sink);

    let SubmitOutcome::Rejected(result) = outcome else {
        panic!("empty email and password must be rejected");
    };
    assert_eq!(result.per_field.len(), 3);
    assert_eq!(
        sink.take(),
        vec![
            ValidationResult::success(FieldId::Username),
            ValidationResult::failure(FieldId::Email, "Email is required"),
            ValidationResult::failure(FieldId::Password, "Password is required"),
        ]
    );
    assert_eq!(form.state(), SubmissionState::Submitted);

    let live = form.on_input("email", "user@", &mut sink);
    assert_eq!(
        live,
        Some(ValidationResult::failure(FieldId::Email, "Email must contain a valid domain"))
    );

    let live = form.on_input("email", "user@example.com", &mut sink);
    assert_eq!(live, Some(ValidationResult::success(FieldId::Email)));
    assert_eq!(sink.rendered().len(), 2);

    // Unregistered inputs are stored but never validated
    assert_eq!(form.on_input("terms", "on", &mut sink), None);
    assert_eq!(form.value("terms"), Some("on"));
}

#[test]
fn successful_submit_clears_form_and_stops_live_revalidation() {
    let mut form = registration();
    let mut sink = RecordingSink::new();

    form.on_submit(&mut sink);
    form.on_input("username", "abc123", &mut sink);
    form.on_input("email", "user@example.com", &mut sink);
    form.on_input("password", "Password1!", &mut sink);
    sink.take();

    assert_eq!(form.on_submit(&mut sink), SubmitOutcome::Accepted);
    assert_eq!(form.state(), SubmissionState::NotSubmitted);
    assert!(form.inputs().iter().all(|input| input.value.is_empty()));

    // Validation results followed by the clearing pass
    let rendered = sink.take();
    assert_eq!(rendered.len(), 6);
    assert!(rendered.iter().all(|r| r.valid && r.message.is_empty()));

    assert_eq!(form.on_input("username", "x", &mut sink), None);
    assert!(sink.rendered().is_empty());
}

#[test]
fn forms_keep_independent_submission_state() {
    let mut screen = AuthScreen::default();
    let mut sink = RecordingSink::new();

    screen.login_mut().on_submit(&mut sink);
    sink.take();

    assert_eq!(screen.login().state(), SubmissionState::Submitted);
    assert_eq!(screen.registration().state(), SubmissionState::NotSubmitted);
    assert_eq!(screen.registration_mut().on_input("username", "ab", &mut sink), None);
    assert!(screen.login_mut().on_input("username", "ab", &mut sink).is_some());
}

#[test]
fn load_config_from_file() {
    let path = std::env::temp_dir().join(format!("auth-forms-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
            [login]
            fields = ["email", "password"]

            [behavior]
            reset_on_switch = false
        "#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.login.fields, vec!["email", "password"]);
    assert!(!config.behavior.reset_on_switch);

    let screen = AuthScreen::from_config(&config);
    assert_eq!(screen.login().inputs().len(), 2);
    assert_eq!(screen.login().inputs()[0].id, "email");
}

#[test]
fn missing_config_file_uses_defaults() {
    let config = Config::load("/nonexistent/auth-forms.toml").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn malformed_config_file_is_an_error() {
    let path = std::env::temp_dir().join(format!("auth-forms-bad-{}.toml", std::process::id()));
    fs::write(&path, "[login\nfields = 1").unwrap();

    let err = Config::load(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(format!("{:#}", err).contains("Failed to load config file"));
}

/// End-to-end form flow: fill inputs by label, submit, inspect the markup
///
/// These follow what a user sees on the page rather than the error map.
use pretty_assertions::assert_eq;
use rstest::rstest;
use signup_form::{Field, FormController, SubmitOutcome};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn fill(form: &mut FormController, label: &str, value: &str) {
    let field = Field::ALL
        .into_iter()
        .find(|f| f.label() == label)
        .unwrap_or_else(|| panic!("no field labelled {label}"));
    form.set_field(field.name(), value).unwrap();
}

fn submit_and_render(form: &mut FormController) -> String {
    form.submit().unwrap();
    form.render().into_string()
}

fn shows(html: &str, message: &str) -> bool {
    html.contains(&format!(r#"<span class="error-message">{message}</span>"#))
}

#[test]
fn test_required_messages_when_everything_is_empty() {
    init_tracing();
    let mut form = FormController::new();
    let html = submit_and_render(&mut form);

    for message in [
        "First name is required",
        "Last name is required",
        "Email is required",
        "Password is required",
        "Please confirm your password",
        "Date of birth is required",
    ] {
        assert!(shows(&html, message), "missing: {message}");
    }
    assert_eq!(html.matches(r#"class="error""#).count(), 6);
}

#[test]
fn test_invalid_email_format() {
    let mut form = FormController::new();
    fill(&mut form, "First Name", "John");
    fill(&mut form, "Last Name", "Doe");
    fill(&mut form, "E-mail", "john@site");
    fill(&mut form, "Password", "password123");
    fill(&mut form, "Confirm Password", "password123");
    fill(&mut form, "Date of Birth (dd/mm/yyyy)", "01/01/2000");

    let html = submit_and_render(&mut form);
    assert!(shows(&html, "Invalid email format"));
}

#[test]
fn test_passwords_do_not_match() {
    let mut form = FormController::new();
    fill(&mut form, "Password", "password123");
    fill(&mut form, "Confirm Password", "password321");

    let html = submit_and_render(&mut form);
    assert!(shows(&html, "Passwords do not match"));
}

#[rstest]
#[case("01-01-2000", "Date format must be dd/mm/yyyy")]
#[case("32/01/2000", "Day must be between 1 and 31")]
#[case("02/21/2000", "Month must be between 1 and 12")]
#[case("30/02/2000", "February cannot have more than 29 days")]
fn test_date_of_birth_errors(#[case] date: &str, #[case] message: &str) {
    let mut form = FormController::new();
    fill(&mut form, "Date of Birth (dd/mm/yyyy)", date);

    let html = submit_and_render(&mut form);
    assert!(shows(&html, message));
}

#[test]
fn test_password_too_short() {
    let mut form = FormController::new();
    fill(&mut form, "Password", "pass123");
    fill(&mut form, "Confirm Password", "pass123");

    let html = submit_and_render(&mut form);
    assert!(shows(&html, "Password must be at least 8 characters"));
}

#[test]
fn test_password_letter_then_special_character() {
    let mut form = FormController::new();
    fill(&mut form, "Password", "12345678");
    fill(&mut form, "Confirm Password", "12345678");
    let html = submit_and_render(&mut form);
    assert!(shows(&html, "Password must contain at least one letter"));

    fill(&mut form, "Password", "abcde123");
    fill(&mut form, "Confirm Password", "abcde123");
    let html = submit_and_render(&mut form);
    assert!(shows(&html, "Password must contain at least one special character"));
    assert!(!shows(&html, "Password must contain at least one letter"));
}

#[test]
fn test_successful_submission_shows_welcome() {
    init_tracing();
    let mut form = FormController::new();
    fill(&mut form, "First Name", "John");
    fill(&mut form, "Last Name", "Doe");
    fill(&mut form, "E-mail", "a@b.com");
    fill(&mut form, "Password", "Passw0rd!");
    fill(&mut form, "Confirm Password", "Passw0rd!");
    fill(&mut form, "Date of Birth (dd/mm/yyyy)", "29/02/2000");

    let outcome = form.submit().unwrap();
    let SubmitOutcome::Submitted(values) = outcome else {
        panic!("expected submission, got {outcome:?}");
    };
    assert_eq!(values.email, "a@b.com");

    let html = form.render().into_string();
    assert!(html.contains("Account created successfully!"));
    assert!(html.contains("Welcome, John!"));
    assert!(!html.contains("<form"));
}

#[test]
fn test_inputs_keep_their_values_after_rejection() {
    let mut form = FormController::new();
    fill(&mut form, "E-mail", "john@site");

    let html = submit_and_render(&mut form);
    assert!(html.contains(r#"value="john@site""#));
    assert!(html.contains("<form"));
}

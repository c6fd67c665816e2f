use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the "message sent" banner stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

// Dots in the local part are checked separately: no leading dot, no "..".
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern should compile")
});

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Your email",
            Field::Subject => "Subject of your message",
            Field::Message => "Your message",
        }
    }

    fn check(self, value: &str) -> Option<&'static str> {
        let ok = match self {
            Field::Name => value.chars().count() >= 2,
            Field::Email => is_email(value),
            Field::Subject => value.chars().count() >= 5,
            Field::Message => value.chars().count() >= 10,
        };
        if ok {
            return None;
        }
        Some(match self {
            Field::Name => "Name must be at least 2 characters",
            Field::Email => "Invalid email address",
            Field::Subject => "Subject must be at least 5 characters",
            Field::Message => "Message must be at least 10 characters",
        })
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.contains("..") && EMAIL_RE.is_match(value)
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

/// Every rule violation of a form, keyed by field in form order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }
}

/// Check every field, collecting all violations.
pub fn validate(input: ContactForm) -> Result<ContactForm, FieldErrors> {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| field.check(input.get(field)).map(|msg| (field, msg)))
        .collect::<BTreeMap<_, _>>();
    if errors.is_empty() {
        Ok(input)
    } else {
        Err(FieldErrors(errors))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SubmissionError(String);

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self(DEFAULT_FAILURE_MESSAGE.to_string())
        } else {
            Self(message)
        }
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Default for SubmissionError {
    fn default() -> Self {
        Self(DEFAULT_FAILURE_MESSAGE.to_string())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Success,
    Failure(String),
}

/// Identifies one successful submission so its display timer can't dismiss a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

/// State behind the contact form: field values, inline errors and submission status.
#[derive(Debug, Default, Clone)]
pub struct ContactFormState {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmissionStatus,
    attempted: bool,
    successes: u64,
}

impl ContactFormState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.status != SubmissionStatus::InFlight
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        // Once the user has tried to submit, errors track the input live
        if self.attempted {
            self.errors = validate(self.form.clone()).err().unwrap_or_default();
        }
    }

    /// Start a submission, or `None` if one is running or the form is invalid.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.status == SubmissionStatus::InFlight {
            return None;
        }
        self.attempted = true;
        match validate(self.form.clone()) {
            Ok(form) => {
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::InFlight;
                Some(form)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Record the relay's answer. Success clears the form; failure keeps it for a retry.
    pub fn finish(&mut self, result: Result<(), SubmissionError>) -> Option<SuccessTicket> {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors = FieldErrors::default();
                self.attempted = false;
                self.status = SubmissionStatus::Success;
                self.successes += 1;
                Some(SuccessTicket(self.successes))
            }
            Err(e) => {
                self.status = SubmissionStatus::Failure(e.message().to_string());
                None
            }
        }
    }

    pub fn expire_success(&mut self, ticket: SuccessTicket) {
        if self.status == SubmissionStatus::Success && ticket.0 == self.successes {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn good_form() -> ContactForm {
        form(
            "Jordan",
            "jordan@example.com",
            "Project inquiry",
            "I would like to discuss a project.",
        )
    }

    fn filled_state() -> ContactFormState {
        let mut state = ContactFormState::default();
        let good = good_form();
        for field in Field::ALL {
            state.set_field(field, good.get(field).to_string());
        }
        state
    }

    #[test]
    fn test_short_fields_all_reported() {
        let errors = validate(form("A", "x@x.com", "Hi", "short")).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get(Field::Name).is_some());
        assert!(errors.get(Field::Email).is_none());
        assert!(errors.get(Field::Subject).is_some());
        assert!(errors.get(Field::Message).is_some());
        let order = errors.iter().map(|(f, _)| f).collect::<Vec<_>>();
        assert_eq!(order, vec![Field::Name, Field::Subject, Field::Message]);
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(good_form()), Ok(good_form()));
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = validate(ContactForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_email_shapes() {
        for ok in [
            "a@b.co",
            "first.last@example.com",
            "o'neil+tag@mail.example.org",
            "x_y-z@sub-domain.example.io",
        ] {
            assert!(is_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            ".user@example.com",
            "us..er@example.com",
            "user.@example.com",
            "user@-example.com",
            "user name@example.com",
        ] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_lengths_count_characters() {
        // Two characters, four bytes
        assert!(Field::Name.check("éé").is_none());
        assert!(Field::Name.check("é").is_some());
    }

    #[test]
    fn test_invalid_submit_records_errors() {
        let mut state = ContactFormState::default();
        state.set_field(Field::Name, "A".to_string());
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.errors().len(), 4);
        assert_eq!(state.status(), &SubmissionStatus::Idle);

        // errors follow edits after the first attempt
        state.set_field(Field::Name, "Al".to_string());
        assert!(state.errors().get(Field::Name).is_none());
        assert_eq!(state.errors().len(), 3);
    }

    #[test]
    fn test_no_live_errors_before_first_attempt() {
        let mut state = ContactFormState::default();
        state.set_field(Field::Email, "nope".to_string());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_second_submit_blocked_while_in_flight() {
        let mut state = filled_state();
        assert_eq!(state.begin_submit(), Some(good_form()));
        assert!(!state.is_submit_enabled());
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.status(), &SubmissionStatus::InFlight);
    }

    #[test]
    fn test_success_clears_form_then_expires() {
        let mut state = filled_state();
        state.begin_submit();
        let ticket = state.finish(Ok(())).expect("success should yield a ticket");

        assert_eq!(state.form(), &ContactForm::default());
        assert_eq!(state.status(), &SubmissionStatus::Success);
        assert!(state.is_submit_enabled());

        state.expire_success(ticket);
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_stale_timer_keeps_newer_success() {
        let mut state = filled_state();
        state.begin_submit();
        let first = state.finish(Ok(())).unwrap();

        for field in Field::ALL {
            state.set_field(field, good_form().get(field).to_string());
        }
        state.begin_submit();
        let second = state.finish(Ok(())).unwrap();

        state.expire_success(first);
        assert_eq!(state.status(), &SubmissionStatus::Success);
        state.expire_success(second);
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_fields_and_reenables() {
        let mut state = filled_state();
        state.begin_submit();
        let ticket = state.finish(Err(SubmissionError::new("The service ID is invalid")));

        assert_eq!(ticket, None);
        assert_eq!(state.form(), &good_form());
        assert_eq!(
            state.status(),
            &SubmissionStatus::Failure("The service ID is invalid".to_string())
        );
        assert!(state.is_submit_enabled());

        // retry goes straight back in flight
        assert_eq!(state.begin_submit(), Some(good_form()));
        assert_eq!(state.status(), &SubmissionStatus::InFlight);
    }

    #[test]
    fn test_blank_failure_uses_default_message() {
        assert_eq!(SubmissionError::new("  ").message(), DEFAULT_FAILURE_MESSAGE);
        assert_eq!(SubmissionError::default().message(), DEFAULT_FAILURE_MESSAGE);
    }
}

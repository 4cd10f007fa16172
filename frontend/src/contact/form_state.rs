use log::{debug, info, warn};
use thiserror::Error;

use super::validation::{validate, ContactForm, ErrorMap, Field, ServiceOption};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    NotSubmitted,
    Submitted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Sorry, your message could not be sent ({0}). Please call us instead.")]
    Encode(String),
}

/// Where a validated enquiry goes once the form passes.
pub trait SubmissionSink {
    fn send(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Logs the enquiry to the browser console. There is no backend to post to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn send(&self, form: &ContactForm) -> Result<(), SubmitError> {
        if ServiceOption::from_label(&form.service).is_none() {
            warn!("Enquiry names a service outside the offered list: {:?}", form.service);
        }
        let body = serde_json::to_string(form).map_err(|e| SubmitError::Encode(e.to_string()))?;
        info!("Contact enquiry received: {}", body);
        Ok(())
    }
}

/// Values, errors and submission flag of one mounted contact form.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactFormState {
    form: ContactForm,
    errors: ErrorMap,
    state: SubmissionState,
    send_error: Option<String>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            errors: ErrorMap::default(),
            state: SubmissionState::NotSubmitted,
            send_error: None,
        }
    }
}

impl ContactFormState {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Form-level failure from the sink, if the last attempt had one.
    pub fn send_error(&self) -> Option<&str> {
        self.send_error.as_deref()
    }

    /// Applies a single field edit. A stale error for that field is hidden
    /// straight away without re-running validation.
    pub fn edit(&mut self, field: Field, value: String) {
        if self.is_submitted() {
            warn!("Ignoring edit to `{}` after submission", field);
            return;
        }
        self.form.set(field, value);
        if self.errors.clear(field) {
            debug!("Cleared stale error for `{}`", field);
        }
    }

    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> SubmissionState {
        if self.is_submitted() {
            return self.state;
        }

        self.errors = validate(&self.form);
        self.send_error = None;

        if !self.errors.is_empty() {
            debug!(
                "Contact form rejected with {} invalid field(s): {:?}",
                self.errors.len(),
                self.errors.fields().collect::<Vec<_>>()
            );
            return self.state;
        }

        match sink.send(&self.form) {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
            }
            Err(e) => {
                warn!("Contact enquiry not delivered: {}", e);
                self.send_error = Some(e.to_string());
            }
        }
        self.state
    }

    pub fn greeting(&self) -> String {
        format!("Thanks, {}. We will be in touch within one working day.", self.form.first_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::FieldError;
    use std::cell::Cell;

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn send(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            Err(SubmitError::Encode("sink closed".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingSink {
        calls: Cell<usize>,
    }

    impl SubmissionSink for CountingSink {
        fn send(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    fn filled(name: &str, contact: &str, service: &str) -> ContactFormState {
        let mut state = ContactFormState::default();
        state.edit(Field::Name, name.to_string());
        state.edit(Field::Contact, contact.to_string());
        state.edit(Field::Service, service.to_string());
        state
    }

    #[test]
    fn starts_empty_and_editable() {
        let state = ContactFormState::default();
        assert_eq!(state.form(), &ContactForm::default());
        assert!(state.errors().is_empty());
        assert!(!state.is_submitted());
    }

    #[test]
    fn empty_submit_flags_three_fields() {
        let mut state = ContactFormState::default();
        let sink = CountingSink::default();

        assert_eq!(state.submit(&sink), SubmissionState::NotSubmitted);
        assert_eq!(
            state.errors().fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Contact, Field::Service]
        );
        assert_eq!(sink.calls.get(), 0);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut state = ContactFormState::default();
        state.submit(&ConsoleSink);
        assert!(state.errors().contains(Field::Name));

        // Still blank, but the stale message goes away until the next submit.
        state.edit(Field::Name, " ".to_string());
        assert!(!state.errors().contains(Field::Name));
        assert!(state.errors().contains(Field::Contact));
        assert!(state.errors().contains(Field::Service));

        state.submit(&ConsoleSink);
        assert_eq!(state.errors().get(Field::Name), Some(FieldError::MissingName));
    }

    #[test]
    fn valid_email_submission_greets_by_first_name() {
        let mut state = filled("Dan Mitchell", "dan@example.com", "SEO");
        state.edit(Field::Message, String::new());

        assert_eq!(state.submit(&ConsoleSink), SubmissionState::Submitted);
        assert!(state.errors().is_empty());
        assert_eq!(state.form().first_name(), "Dan");
        assert!(state.greeting().starts_with("Thanks, Dan."));
    }

    #[test]
    fn phone_number_is_enough_contact() {
        let mut state = filled("Jo", "07700 900123", "Branding");
        assert_eq!(state.submit(&ConsoleSink), SubmissionState::Submitted);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn submission_is_one_way() {
        let sink = CountingSink::default();
        let mut state = filled("Jo", "07700 900123", "Branding");
        state.submit(&sink);

        state.edit(Field::Name, String::new());
        assert_eq!(state.form().name, "Jo");
        assert_eq!(state.submit(&sink), SubmissionState::Submitted);
        assert_eq!(sink.calls.get(), 1);
    }

    #[test]
    fn sink_failure_keeps_form_open() {
        let mut state = filled("Jo", "07700 900123", "Branding");

        assert_eq!(state.submit(&FailingSink), SubmissionState::NotSubmitted);
        assert!(state.errors().is_empty());
        assert_eq!(state.send_error(), Some(SubmitError::Encode("sink closed".to_string()).to_string().as_str()));

        assert_eq!(state.submit(&ConsoleSink), SubmissionState::Submitted);
        assert_eq!(state.send_error(), None);
    }
}

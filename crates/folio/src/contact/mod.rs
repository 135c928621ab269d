//! The contact form.
//!
//! [`ContactForm`] is a plain value with pure transitions, so the validation
//! rules can be exercised without any rendering:
//!
//! ```
//! use folio::contact::{ContactForm, Field, SubmitOutcome};
//!
//! let form = ContactForm::new()
//!     .apply_field_change(Field::Name, "Ada")
//!     .apply_field_change(Field::Email, "ada@example.com")
//!     .apply_field_change(Field::Message, "Hello!");
//!
//! let (form, outcome) = form.apply_submit();
//! assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
//! assert!(form.submitted);
//! ```
//!
//! [`ContactFormController`] owns one form together with a
//! [`SubmissionSink`] and drives it from field-change and submit events.

mod email;
mod form;
mod sink;

pub use email::is_valid_email;
pub use form::{
    validate, ContactForm, ContactFormErrors, ContactFormState, ErrorKey, Field, Submission,
    SubmitOutcome, EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, NAME_REQUIRED,
};
pub use sink::{DeliveryError, LocalAcknowledgement, SubmissionSink};

use tracing::{error, info};

use crate::config::ContactConfig;
use crate::error::Result;

/// Event-driven owner of one contact form.
#[derive(Debug)]
pub struct ContactFormController<S: SubmissionSink = LocalAcknowledgement> {
    form: ContactForm,
    sink: S,
    failure_message: String,
}

impl ContactFormController<LocalAcknowledgement> {
    /// A controller with a blank form that acknowledges submissions locally.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(LocalAcknowledgement)
    }
}

impl Default for ContactFormController<LocalAcknowledgement> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SubmissionSink> ContactFormController<S> {
    /// A controller with a blank form delivering through `sink`.
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        Self {
            form: ContactForm::new(),
            sink,
            failure_message: ContactConfig::default().failure_message,
        }
    }

    /// Use the configured failure message.
    #[must_use]
    pub fn with_config(mut self, config: &ContactConfig) -> Self {
        self.failure_message.clone_from(&config.failure_message);
        self
    }

    /// The current form.
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// The delivery sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle a change to one field.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.form = std::mem::take(&mut self.form).apply_field_change(field, value);
    }

    /// Handle a change to a field identified by its markup name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownField`] if `name` is not a form field;
    /// the form is left unchanged.
    pub fn on_named_field_change(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: Field = name.parse()?;
        self.on_field_change(field, value);
        Ok(())
    }

    /// Handle a submit event.
    ///
    /// A valid form is handed to the sink. If the sink fails, the form keeps
    /// its values, `submitted` is unchanged and the form-level error is set.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let before = self.form.clone();
        let (after, outcome) = std::mem::take(&mut self.form).apply_submit();

        let submission = match outcome {
            SubmitOutcome::Accepted(submission) => submission,
            rejected => {
                self.form = after;
                return rejected;
            }
        };

        match self.sink.deliver(&submission) {
            Ok(()) => {
                info!(sink = self.sink.name(), "Contact form submitted");
                self.form = after;
                SubmitOutcome::Accepted(submission)
            }
            Err(err) => {
                error!(error = %err, "Contact form submission error");
                self.form = before.apply_delivery_failure(self.failure_message.clone());
                SubmitOutcome::DeliveryFailed { reason: err.reason }
            }
        }
    }
}
